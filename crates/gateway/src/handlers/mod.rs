//! HTTP request handlers.

pub mod health_handler;
pub mod volunteer_handler;

pub use health_handler::health_routes;
pub use volunteer_handler::volunteer_routes;
