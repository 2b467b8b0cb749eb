use crate::errors::{Error, Result};

/// Splits a command line on whitespace. Double quotes group words into one token;
/// `""` yields an empty token.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(Error::parse(format!(
            "Unterminated quote in '{}'.",
            line.trim()
        )));
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Cursor over the arguments that follow the command word.
pub struct TokenStream<'a> {
    tokens: &'a [String],
    pos: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [String]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn next(&mut self) -> Option<&'a str> {
        let tok = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(tok.as_str())
    }
}
