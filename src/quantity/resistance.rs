use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::quantity::round_to_hundredths;

/// Effective series resistance of a cell. Rises with aging.
#[derive(
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Add,
    derive_more::Sub,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct Milliohms(pub f64);

impl Milliohms {
    pub const ZERO: Self = Self(0.0);

    pub fn from_ohms(ohms: f64) -> Self {
        Self(ohms * 1000.0)
    }

    #[must_use]
    pub fn round_to_hundredths(self) -> Self {
        Self(round_to_hundredths(self.0))
    }
}

impl Display for Milliohms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} mΩ", self.0)
    }
}

impl Debug for Milliohms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}mΩ", self.0)
    }
}
