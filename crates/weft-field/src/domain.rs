//! The two domains a discretized field can live in.

use std::fmt;

/// Domain of a field buffer: sampled point values or expansion
/// coefficients.
///
/// Always derived from a buffer's layout by matching against the owning
/// space's forward-output descriptor, never stored alongside the data.
/// When a space's input and output descriptors coincide (a real-to-real
/// transform of unchanged extents), the coefficient interpretation
/// wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Values sampled on the quadrature grid (forward-transform input).
    Physical,
    /// Spectral-expansion coefficients (forward-transform output).
    Coefficient,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Physical => write!(f, "physical"),
            Self::Coefficient => write!(f, "coefficient"),
        }
    }
}
