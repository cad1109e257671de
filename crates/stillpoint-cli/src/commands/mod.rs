pub mod breathe;
pub mod config;
pub mod guides;
pub mod meditate;
pub mod streak;
