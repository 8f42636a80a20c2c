use serde_json::json;

use crate::integration::{create_test_state, init_tracing};
use crate::utils::TestConn;

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    init_tracing();

    let state = create_test_state();
    let mut alice = TestConn::connect(&state);
    let mut imposter = TestConn::connect(&state);

    alice.join("R1", "alice");
    while alice.try_next().is_some() {}

    imposter.join("R1", "alice");

    assert_eq!(
        imposter.try_next().unwrap(),
        json!({"type": "error", "message": "User already exists"})
    );
    imposter.assert_silent();
    alice.assert_silent();

    assert_eq!(state.rooms.users("R1").unwrap(), vec!["alice"]);
    assert_eq!(state.rooms.session_count(), 1);
}
