//! The closed set of roles an operand can play in a form.

use std::fmt;

/// Role of an operand in a linear or bilinear form.
///
/// A bilinear form pairs a `Test` operand with a `Trial` operand; a
/// linear form pairs a `Test` operand with a `Value` (known data, e.g.
/// a previous iterate in a nonlinear or time-stepping term). The algebra
/// refuses to sum operands with different roles within one side of a
/// form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Argument {
    /// Test function (argument 0 to a form).
    Test,
    /// Trial function (argument 1 to a form).
    Trial,
    /// Known data bound into the form (argument 2).
    Value,
}

impl Argument {
    /// Numeric role for interop with assembly engines: 0, 1, or 2.
    pub fn as_index(self) -> u32 {
        match self {
            Self::Test => 0,
            Self::Trial => 1,
            Self::Value => 2,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Test => write!(f, "test"),
            Self::Trial => write!(f, "trial"),
            Self::Value => write!(f, "value"),
        }
    }
}
