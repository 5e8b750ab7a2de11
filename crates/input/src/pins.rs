//! Splitting a roll line into pin counts.
//!
//! Tokens are parsed lazily, one at a time, so the caller can apply each ball
//! before looking at the next and stop at the first bad token. Range checks are
//! left to the scoring core.

use std::str::SplitWhitespace;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinsError {
    #[error("Use space-delimited digits in range [0, 10] (got \"{token}\").")]
    NotANumber { token: String },
}

/// Iterator over the whitespace-separated tokens of a roll line.
#[derive(Debug, Clone)]
pub struct PinTokens<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> Iterator for PinTokens<'a> {
    type Item = Result<i32, PinsError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        Some(token.parse::<i32>().map_err(|_| PinsError::NotANumber {
            token: token.to_string(),
        }))
    }
}

/// Parse a line such as `"10 7 3"` into pin counts.
pub fn parse_pins(line: &str) -> PinTokens<'_> {
    PinTokens {
        tokens: line.split_whitespace(),
    }
}
