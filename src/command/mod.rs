pub mod command_parser;
pub mod command_resolver;
pub mod commands;
pub mod manual;
pub mod request;
#[cfg(test)]
mod tests;
pub mod tokens;
