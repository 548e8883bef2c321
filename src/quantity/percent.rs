use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::quantity::round_to_hundredths;

/// A percentage point value, used for both state of charge and state of health.
#[derive(
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Sum,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct Percent(pub f64);

impl Percent {
    pub const ZERO: Self = Self(0.0);
    pub const FULL: Self = Self(100.0);

    /// Clamp into the reportable `0..=100` range.
    #[must_use]
    pub fn saturate(self) -> Self {
        Self(self.0.clamp(0.0, 100.0))
    }

    #[must_use]
    pub fn round_to_hundredths(self) -> Self {
        Self(round_to_hundredths(self.0))
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

impl Debug for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_saturate() {
        assert_abs_diff_eq!(Percent(-3.0).saturate().0, 0.0);
        assert_abs_diff_eq!(Percent(42.0).saturate().0, 42.0);
        assert_abs_diff_eq!(Percent(108.5).saturate().0, 100.0);
    }
}
