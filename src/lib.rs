pub mod config;
pub mod todo;
pub mod tui;
