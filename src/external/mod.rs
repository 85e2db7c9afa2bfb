pub mod sales_auth;

pub use sales_auth::*;
