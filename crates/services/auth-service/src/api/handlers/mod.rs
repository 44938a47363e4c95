//! Request handlers.

mod authorize;
mod health;

pub use authorize::{authorize, authorize_routes};
pub use health::{health_check, health_routes, HealthResponse};
