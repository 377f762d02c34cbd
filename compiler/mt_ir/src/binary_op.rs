//! Binary operators and the selectors they send.

use std::fmt;

use crate::TokenKind;

/// A binary message written as an operator symbol.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Eq,
}

impl BinaryOp {
    pub fn from_kind(kind: TokenKind) -> Option<BinaryOp> {
        Some(match kind {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Ampersand => BinaryOp::And,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::LtEq => BinaryOp::LtEq,
            TokenKind::GtEq => BinaryOp::GtEq,
            TokenKind::EqEq => BinaryOp::Eq,
            _ => return None,
        })
    }

    /// Message names this operator answers to, tried in order.
    pub fn selectors(self) -> &'static [&'static str] {
        match self {
            BinaryOp::Add => &["plus", "add"],
            BinaryOp::Sub => &["minus", "sub"],
            BinaryOp::Mul => &["mul"],
            BinaryOp::Div => &["div"],
            BinaryOp::And => &["and"],
            BinaryOp::Lt => &["lt"],
            BinaryOp::Gt => &["gt"],
            BinaryOp::LtEq => &["le"],
            BinaryOp::GtEq => &["ge"],
            BinaryOp::Eq => &["eq"],
        }
    }

    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::And => "&",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::Eq => "==",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operator_token_maps() {
        let kinds = [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Ampersand,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::EqEq,
        ];
        for kind in kinds {
            let op = BinaryOp::from_kind(kind);
            assert!(op.is_some(), "{kind:?} should be an operator");
        }
        assert_eq!(BinaryOp::from_kind(TokenKind::Assign), None);
        assert_eq!(BinaryOp::from_kind(TokenKind::Colon), None);
    }

    #[test]
    fn test_selectors() {
        assert_eq!(BinaryOp::Add.selectors(), &["plus", "add"]);
        assert_eq!(BinaryOp::Sub.selectors(), &["minus", "sub"]);
        assert_eq!(BinaryOp::Eq.selectors(), &["eq"]);
        assert_eq!(BinaryOp::LtEq.to_string(), "<=");
    }
}
