pub mod auth;
pub mod cors;

pub use auth::SalesAuthMiddleware;
pub use cors::create_cors;
