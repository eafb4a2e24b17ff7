pub mod about;
pub mod monitor;
