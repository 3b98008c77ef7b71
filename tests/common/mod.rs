use std::sync::Once;

use elo_change::{utils::test_utils::generate_performance, PlayerPerformance};

static INIT: Once = Once::new();

/// Initialize test logging so the scorer's debug events are formatted
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("elo_change=debug"))
            .with_test_writer()
            .try_init();
    });
}

/// The worked example: 88th place, 1 kill, 2 downs, 7 assists, 25% accuracy,
/// 3 of 25 minutes survived.
pub fn reference_performance() -> PlayerPerformance {
    generate_performance(88, 1, 2, 7, 0.25, 3.0)
}
