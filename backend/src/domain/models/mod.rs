pub mod activity;
pub mod booking;
