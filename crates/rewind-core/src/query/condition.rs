use super::Parameters;
use crate::Value;

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
}

impl BinaryOp {
    /// `Eq` when `equals` is true, `Ne` otherwise.
    pub fn equality(equals: bool) -> BinaryOp {
        if equals {
            BinaryOp::Eq
        } else {
            BinaryOp::Ne
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Eq => "=".fmt(f),
            BinaryOp::Ne => "<>".fmt(f),
        }
    }
}

impl fmt::Debug for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Another property path
    Property(String),

    /// A value bound positionally when the restriction is rendered
    Param(Value),

    /// A parameter bound by the caller under the given name
    NamedParam(String),
}

/// A single restriction in a [`Parameters`] tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Compare {
        left: String,
        op: BinaryOp,
        right: Operand,
    },

    /// `property IS NULL`, or `IS NOT NULL` when negated.
    IsNull { property: String, negate: bool },

    /// A parenthesized group with its own connective.
    Group(Parameters),
}
