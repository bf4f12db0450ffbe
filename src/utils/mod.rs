pub mod colors;
pub mod datetime;
