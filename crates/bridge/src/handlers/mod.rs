//! HTTP handlers.

pub mod forum_handler;
pub mod health_handler;
pub mod interaction_handler;
pub mod relay_handler;
pub mod thread_handler;

pub use forum_handler::forum_routes;
pub use health_handler::health_routes;
pub use interaction_handler::interaction_routes;
pub use relay_handler::relay_routes;
pub use thread_handler::thread_routes;
