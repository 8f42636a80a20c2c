use crate::integration::{create_test_state, init_tracing};
use crate::utils::TestConn;

#[tokio::test]
async fn test_disconnect_without_join_is_quiet() {
    init_tracing();

    let state = create_test_state();
    let mut alice = TestConn::connect(&state);
    let idler = TestConn::connect(&state);

    alice.join("R1", "alice");
    while alice.try_next().is_some() {}

    // A connection that never joined leaves no trace when it goes.
    idler.disconnect();

    alice.assert_silent();
    assert_eq!(state.rooms.users("R1").unwrap(), vec!["alice"]);
    assert_eq!(state.rooms.room_count(), 1);
}
