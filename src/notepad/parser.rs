//! Splits a raw input line into a command token and its argument words.
//!
//! The parser knows nothing about which commands exist; resolving the token is
//! left to [`crate::commands::Action`].

/// One line of input broken into its command token and argument words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLine {
    pub command: String,
    pub args: Vec<String>,
}

impl ParsedLine {
    /// The argument words rejoined with single spaces.
    pub fn rest(&self) -> String {
        self.args.join(" ")
    }
}

/// Trims the line and splits it on single spaces.
///
/// Runs of spaces between arguments produce empty words, which keeps the
/// rejoined argument string identical to what was typed.
pub fn parse_line(line: &str) -> ParsedLine {
    let mut words = line.trim().split(' ').map(str::to_string);
    let command = words.next().unwrap_or_default();
    ParsedLine {
        command,
        args: words.collect(),
    }
}
