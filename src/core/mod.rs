pub mod add;
pub mod calculator;
pub mod config;
pub mod dashboard;
pub mod del;
pub mod edit;
pub mod log;
pub mod settings;
