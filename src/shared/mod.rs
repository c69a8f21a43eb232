pub mod config;
pub mod dirs;
pub mod prompt;
pub mod table;
