pub mod aggregate;
pub mod duration;
