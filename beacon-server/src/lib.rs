pub mod config;
pub mod registry;
pub mod room;
pub mod signaling;

pub use config::ServerConfig;
pub use registry::ConnectionRegistry;
pub use room::{JoinReject, RoomTable};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Everything a connection handler needs: the send queues and the rooms.
/// Cloning is cheap, both services share their state behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub registry: ConnectionRegistry,
    pub rooms: RoomTable,
}

impl AppState {
    pub fn new() -> Self {
        let registry = ConnectionRegistry::new();
        let rooms = RoomTable::new(registry.clone());
        Self { registry, rooms }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/signal", get(signaling::ws_handler))
        .layer(cors)
        .with_state(state)
}
