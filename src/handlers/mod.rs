pub mod maintenance;
pub mod order;

pub use maintenance::maintenance_config;
pub use order::order_config;
