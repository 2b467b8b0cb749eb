pub mod catalog;
pub mod cli;
pub mod context;
pub mod defaults;
pub mod models;
pub mod persist;
pub mod session;
pub mod store;
pub mod types;
