use serde_json::json;

use crate::integration::{create_test_state, init_tracing};
use crate::utils::TestConn;

#[tokio::test]
async fn test_malformed_frame_gets_error() {
    init_tracing();

    let state = create_test_state();
    let mut alice = TestConn::connect(&state);

    alice.send_raw("this is not json");

    let reply = alice.try_next().unwrap();
    assert_eq!(reply["type"], "error");
    let message = reply["message"].as_str().unwrap();
    assert!(
        message.starts_with("Malformed message: "),
        "unexpected error text: {message}"
    );
    alice.assert_silent();

    // The connection survives the bad frame and can still join.
    alice.join("R1", "alice");
    assert_eq!(
        alice.try_next().unwrap(),
        json!({"type": "joined", "role": "caller", "users": ["alice"]})
    );
}
