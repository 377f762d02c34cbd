//! Recoverable error values.

use std::fmt;

/// Class of a recoverable error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NameError,
    TypeError,
    ValueError,
    ZeroDivisionError,
    NotImplementedError,
}

impl ErrorKind {
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::NameError => "NameError",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ValueError => "ValueError",
            ErrorKind::ZeroDivisionError => "ZeroDivisionError",
            ErrorKind::NotImplementedError => "NotImplementedError",
        }
    }

    /// Message used when an error is raised without one.
    pub fn default_message(self) -> &'static str {
        match self {
            ErrorKind::NameError => "name not defined",
            ErrorKind::TypeError => "type mismatch error",
            ErrorKind::ValueError => "wrong value",
            ErrorKind::ZeroDivisionError => "division by zero",
            ErrorKind::NotImplementedError => "not implemented",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error that travels through evaluation as an ordinary value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ErrorValue {
    kind: ErrorKind,
    message: String,
}

impl ErrorValue {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            kind.default_message().to_string()
        } else {
            message
        };
        ErrorValue { kind, message }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
