pub mod cli;
pub mod dispatch;
pub mod input;
pub mod summary;
pub mod types;
pub mod utils;
pub mod workout;
