pub mod actions;
pub mod executors;
pub mod exit;
