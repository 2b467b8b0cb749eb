use crate::command::command_resolver::{
    CatalogResolver, CommandResolver, GlobalResolver, ScheduleResolver,
};
use crate::command::request::Request;
use crate::command::tokens::tokenize;
use crate::errors::{Error, Result};

pub struct CommandParser {
    registry: Vec<Box<dyn CommandResolver>>,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    pub fn new() -> Self {
        Self {
            registry: vec![
                Box::new(ScheduleResolver),
                Box::new(CatalogResolver),
                Box::new(GlobalResolver),
            ],
        }
    }

    /// Tokenizes `line` and resolves its first word. An empty line is a parse error.
    pub fn parse_line(&self, line: &str) -> Result<Request> {
        let tokens = tokenize(line)?;
        let (command, args) = tokens
            .split_first()
            .ok_or_else(|| Error::parse("Empty command."))?;
        self.parse(command, args)
    }

    pub fn parse(&self, command: &str, args: &[String]) -> Result<Request> {
        for r in &self.registry {
            if r.can_resolve(command) {
                return r.resolve(command, args);
            }
        }
        Err(Error::unknown(command))
    }
}
