use serde_json::json;

use crate::integration::{create_test_state, init_tracing};
use crate::utils::TestConn;

#[tokio::test]
async fn test_second_join_from_same_connection_is_rejected() {
    init_tracing();

    let state = create_test_state();
    let mut alice = TestConn::connect(&state);

    alice.join("R1", "alice");
    while alice.try_next().is_some() {}

    // A connection holds at most one membership, even under a new name.
    alice.join("R2", "alice2");

    assert_eq!(
        alice.try_next().unwrap(),
        json!({"type": "error", "message": "Already in a room"})
    );
    alice.assert_silent();

    assert_eq!(state.rooms.users("R1").unwrap(), vec!["alice"]);
    assert!(state.rooms.users("R2").is_none());
    assert_eq!(state.rooms.room_count(), 1);
}
