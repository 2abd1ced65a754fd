pub mod booking;
pub mod cart;
pub mod shared_booking;
