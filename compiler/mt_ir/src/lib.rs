//! Shared vocabulary for the minitalk crates.
//!
//! Everything here is plain data: source spans, lexical tokens and the
//! binary operator table. The lexer produces these types, the evaluator
//! consumes them, and the diagnostic layer points back into source with
//! [`Span`].

mod binary_op;
mod span;
mod token;

pub use binary_op::BinaryOp;
pub use span::Span;
pub use token::{Token, TokenKind};
