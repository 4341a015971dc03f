//! HTTP API around the subnet calculator.
//!
//! - `app` - router wiring and the server loop
//! - `handlers` - the `/`, `/info` and `/ipcalc` endpoints
//! - `error` - JSON error responses

mod app;
mod error;
mod handlers;

pub use app::{create_router, App, AppState};
pub use error::{ApiError, ErrorBody};
pub use handlers::HttpInfo;
