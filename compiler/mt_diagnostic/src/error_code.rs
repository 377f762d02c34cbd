//! Error codes for minitalk diagnostics.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where the first digit is the phase:
/// - E0xxx: token-level errors
/// - E1xxx: statement structure errors raised while evaluating
/// - E9xxx: evaluator limits
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Character that starts no token
    E0001,
    /// Radix base outside 2..=36
    E0002,
    /// Digit not valid in the radix base
    E0003,
    /// Integer literal does not fit in 64 bits
    E0004,

    /// Closing bracket with no opener
    E1001,
    /// Opening bracket never closed
    E1002,
    /// `()` with nothing inside
    E1003,
    /// `:=` not preceded by a bare variable name
    E1004,
    /// Binary operator with no receiver
    E1005,
    /// Sign applied to something that is not a number
    E1006,
    /// Two values with no message between them
    E1007,
    /// Malformed `[:a :b | ...]` parameter list
    E1008,
    /// Keyword part with no receiver or no argument
    E1009,
    /// `;` with no previous message to cascade from
    E1010,
    /// Unary send of a message that takes an argument
    E1011,
    /// Token that cannot appear where it is
    E1012,
    /// Binary or keyword message with no argument after it
    E1013,

    /// Block nesting exceeded the configured depth
    E9001,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1012,
        ErrorCode::E1013,
        ErrorCode::E9001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description, used by `mtc --explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "character that starts no token",
            ErrorCode::E0002 => "radix base must be between 2 and 36",
            ErrorCode::E0003 => "digit is not valid in the radix base",
            ErrorCode::E0004 => "integer literal does not fit in 64 bits",
            ErrorCode::E1001 => "closing bracket with no matching opener",
            ErrorCode::E1002 => "opening bracket is never closed",
            ErrorCode::E1003 => "parentheses with nothing inside",
            ErrorCode::E1004 => "assignment needs a variable name on its left",
            ErrorCode::E1005 => "binary message with no receiver",
            ErrorCode::E1006 => "sign applied to something that is not a number literal",
            ErrorCode::E1007 => "two values with no message between them",
            ErrorCode::E1008 => "malformed block parameter list",
            ErrorCode::E1009 => "keyword message part without a receiver or argument",
            ErrorCode::E1010 => "cascade with no previous message",
            ErrorCode::E1011 => "message needs a keyword argument",
            ErrorCode::E1012 => "token cannot appear here",
            ErrorCode::E1013 => "message is missing its argument",
            ErrorCode::E9001 => "block calls nested too deeply",
        }
    }

    pub fn is_token_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
