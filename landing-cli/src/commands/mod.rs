pub mod completion;
pub mod compose;
pub mod config;
pub mod export;
