use serde_json::json;

use crate::integration::{create_test_state, init_tracing};
use crate::utils::TestConn;

#[tokio::test]
async fn test_unknown_type_gets_error() {
    init_tracing();

    let state = create_test_state();
    let mut alice = TestConn::connect(&state);

    alice.send_raw(r#"{"type":"leave","roomId":"R1"}"#);

    assert_eq!(
        alice.try_next().unwrap(),
        json!({"type": "error", "message": "Unknown message type: leave"})
    );
    alice.assert_silent();
}
