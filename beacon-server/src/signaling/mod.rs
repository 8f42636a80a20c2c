mod dispatcher;
mod ws;

pub use dispatcher::*;
pub use ws::*;
