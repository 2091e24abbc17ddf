pub mod booking;
pub mod housekeeping;
