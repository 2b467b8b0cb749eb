mod common;

mod config;
mod library;
mod persist;
mod repl;
