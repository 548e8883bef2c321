use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Cell current. Positive while discharging into the load.
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
pub struct Amperes(pub f64);

impl Amperes {
    pub const ZERO: Self = Self(0.0);

    /// An open-circuit reading: no current flowing, no voltage drop to observe.
    #[must_use]
    pub fn is_open_circuit(self) -> bool {
        self.0 == 0.0
    }
}

impl Display for Amperes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} A", self.0)
    }
}

impl Debug for Amperes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}A", self.0)
    }
}
