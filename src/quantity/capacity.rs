use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Charge capacity of a cell.
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
pub struct AmpereHours(pub f64);

impl Display for AmpereHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} Ah", self.0)
    }
}

impl Debug for AmpereHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}Ah", self.0)
    }
}
