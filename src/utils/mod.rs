pub mod export;
pub mod prize_wheel;

pub use export::order_records_csv;
pub use prize_wheel::draw_prize;
