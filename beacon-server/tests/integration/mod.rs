pub mod join_tests;
pub mod protocol_tests;
pub mod relay_tests;

use beacon_server::AppState;
use tracing::Level;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_state() -> AppState {
    AppState::new()
}
