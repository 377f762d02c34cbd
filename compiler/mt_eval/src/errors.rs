//! Fatal evaluation errors.
//!
//! A [`SyntaxError`] aborts the statement being evaluated; nothing it
//! computed becomes a result. Recoverable failures are
//! [`Value::Error`](crate::Value::Error) values instead and never appear
//! here.

use mt_diagnostic::{Diagnostic, ErrorCode};
use mt_ir::{BinaryOp, Span, TokenKind};
use thiserror::Error;

/// Result of evaluating something that may abort the statement.
pub type EvalResult<T = crate::Object> = Result<T, SyntaxError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("invalid syntax: unexpected character `{text}`")]
    InvalidCharacter { text: String, span: Span },

    #[error("invalid base {base}")]
    InvalidRadixBase { base: String, span: Span },

    #[error("invalid number `{digits}` in base {base}")]
    InvalidRadixDigits {
        base: u32,
        digits: String,
        span: Span,
    },

    #[error("integer literal `{text}` does not fit in 64 bits")]
    IntegerOverflow { text: String, span: Span },

    #[error("unmatched `{delimiter}`")]
    UnmatchedClose { delimiter: char, span: Span },

    /// `span` is the opener, `end` the last token of the statement.
    #[error("unclosed `{delimiter}`")]
    Unclosed {
        delimiter: char,
        span: Span,
        end: Span,
    },

    #[error("empty parentheses")]
    EmptyParentheses { span: Span },

    #[error("`:=` must follow a variable name")]
    InvalidAssignment { span: Span },

    #[error("binary message `{op}` has no receiver")]
    MissingReceiver { op: BinaryOp, span: Span },

    #[error("invalid unary minus for {what}")]
    InvalidSign { what: String, span: Span },

    #[error("missing message between two values")]
    AdjacentValues { span: Span },

    #[error("malformed block parameters: {reason}")]
    MalformedBlock { reason: &'static str, span: Span },

    #[error("keyword `{keyword}:` has no receiver")]
    KeywordWithoutReceiver { keyword: String, span: Span },

    #[error("message `{selector}` is missing its argument")]
    MissingArgument { selector: String, span: Span },

    #[error("cascade `;` has no previous message")]
    InvalidCascade { span: Span },

    #[error("message `{selector}` needs an argument")]
    ArgumentRequired { selector: String, span: Span },

    #[error("unexpected {kind}")]
    UnexpectedToken { kind: TokenKind, span: Span },

    #[error("block calls nested deeper than {limit}")]
    RecursionLimit { limit: usize, span: Span },
}

impl SyntaxError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SyntaxError::InvalidCharacter { .. } => ErrorCode::E0001,
            SyntaxError::InvalidRadixBase { .. } => ErrorCode::E0002,
            SyntaxError::InvalidRadixDigits { .. } => ErrorCode::E0003,
            SyntaxError::IntegerOverflow { .. } => ErrorCode::E0004,
            SyntaxError::UnmatchedClose { .. } => ErrorCode::E1001,
            SyntaxError::Unclosed { .. } => ErrorCode::E1002,
            SyntaxError::EmptyParentheses { .. } => ErrorCode::E1003,
            SyntaxError::InvalidAssignment { .. } => ErrorCode::E1004,
            SyntaxError::MissingReceiver { .. } => ErrorCode::E1005,
            SyntaxError::InvalidSign { .. } => ErrorCode::E1006,
            SyntaxError::AdjacentValues { .. } => ErrorCode::E1007,
            SyntaxError::MalformedBlock { .. } => ErrorCode::E1008,
            SyntaxError::KeywordWithoutReceiver { .. } => ErrorCode::E1009,
            SyntaxError::InvalidCascade { .. } => ErrorCode::E1010,
            SyntaxError::ArgumentRequired { .. } => ErrorCode::E1011,
            SyntaxError::UnexpectedToken { .. } => ErrorCode::E1012,
            SyntaxError::MissingArgument { .. } => ErrorCode::E1013,
            SyntaxError::RecursionLimit { .. } => ErrorCode::E9001,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            SyntaxError::InvalidCharacter { span, .. }
            | SyntaxError::InvalidRadixBase { span, .. }
            | SyntaxError::InvalidRadixDigits { span, .. }
            | SyntaxError::IntegerOverflow { span, .. }
            | SyntaxError::UnmatchedClose { span, .. }
            | SyntaxError::Unclosed { span, .. }
            | SyntaxError::EmptyParentheses { span }
            | SyntaxError::InvalidAssignment { span }
            | SyntaxError::MissingReceiver { span, .. }
            | SyntaxError::InvalidSign { span, .. }
            | SyntaxError::AdjacentValues { span }
            | SyntaxError::MalformedBlock { span, .. }
            | SyntaxError::KeywordWithoutReceiver { span, .. }
            | SyntaxError::MissingArgument { span, .. }
            | SyntaxError::InvalidCascade { span }
            | SyntaxError::ArgumentRequired { span, .. }
            | SyntaxError::UnexpectedToken { span, .. }
            | SyntaxError::RecursionLimit { span, .. } => *span,
        }
    }

    /// Build the diagnostic reported when this error discards a statement.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span(), self.label());

        match self {
            SyntaxError::InvalidRadixBase { .. } => {
                diag.with_note("radix literals look like `16rFF`, with a base from 2 to 36")
            }
            SyntaxError::InvalidAssignment { .. } => {
                diag.with_suggestion("write the variable name directly before `:=`")
            }
            SyntaxError::AdjacentValues { .. } => {
                diag.with_note("a value must be followed by a message, an operator or `.`")
            }
            SyntaxError::InvalidSign { .. } => {
                diag.with_note("a leading `-` only applies to numbers")
            }
            SyntaxError::Unclosed { delimiter, end, .. } => {
                let close = if *delimiter == '(' { ')' } else { ']' };
                diag.with_secondary_label(*end, format!("statement ends here without `{close}`"))
            }
            SyntaxError::ArgumentRequired { selector, .. } => {
                diag.with_suggestion(format!("send it as a keyword message: `{selector}: value`"))
            }
            _ => diag,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SyntaxError::InvalidCharacter { .. } => "not valid here",
            SyntaxError::InvalidRadixBase { .. } => "base out of range",
            SyntaxError::InvalidRadixDigits { .. } => "digit out of range for this base",
            SyntaxError::IntegerOverflow { .. } => "too large",
            SyntaxError::UnmatchedClose { .. } => "no matching opener",
            SyntaxError::Unclosed { .. } => "opened here",
            SyntaxError::EmptyParentheses { .. } => "expected an expression inside",
            SyntaxError::InvalidAssignment { .. } => "nothing to assign to",
            SyntaxError::MissingReceiver { .. } => "no value before this operator",
            SyntaxError::InvalidSign { .. } => "sign applied here",
            SyntaxError::AdjacentValues { .. } => "unexpected value",
            SyntaxError::MalformedBlock { .. } => "in this block",
            SyntaxError::KeywordWithoutReceiver { .. } => "no value before this keyword",
            SyntaxError::MissingArgument { .. } => "argument expected after this",
            SyntaxError::InvalidCascade { .. } => "nothing to cascade to",
            SyntaxError::ArgumentRequired { .. } => "sent without an argument",
            SyntaxError::UnexpectedToken { .. } => "unexpected",
            SyntaxError::RecursionLimit { .. } => "while calling this block",
        }
    }
}
