use crate::integration::{create_test_state, init_tracing};
use crate::utils::TestConn;

#[tokio::test]
async fn test_ice_resend_is_forwarded_every_time() {
    init_tracing();

    let state = create_test_state();
    let mut alice = TestConn::connect(&state);
    let mut bob = TestConn::connect(&state);

    alice.join("R1", "alice");
    bob.join("R1", "bob");
    while alice.try_next().is_some() {}
    while bob.try_next().is_some() {}

    // Candidates are not deduplicated; a retransmit reaches the peer again.
    let candidate = r#"{"type":"ice","roomId":"R1","from":"alice","payload":"candidate:1"}"#;
    alice.send_raw(candidate);
    alice.send_raw(candidate);

    assert_eq!(bob.try_next_raw().unwrap(), candidate);
    assert_eq!(bob.try_next_raw().unwrap(), candidate);
    bob.assert_silent();
}
