pub mod history;
pub mod models;
pub mod parser;
pub mod store;
