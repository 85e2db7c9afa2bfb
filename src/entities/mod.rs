pub mod order_records;

pub use order_records as order_record_entity;
