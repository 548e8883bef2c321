use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Cell terminal voltage.
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
pub struct Volts(pub f64);

impl Display for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} V", self.0)
    }
}

impl Debug for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}V", self.0)
    }
}
