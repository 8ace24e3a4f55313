pub mod booking;
pub mod reservation;
pub mod service;
pub mod slot;
