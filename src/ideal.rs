use crate::activity::fmt_chemicals;
use crate::parameter::{GroupCount, Identifier};
use crate::{ActivityCoefficients, ActivityResult};
use ndarray::Array1;
use std::fmt;

/// Ideal liquid: all activity coefficients are unity.
#[derive(Clone, Debug)]
pub struct IdealActivityCoefficients {
    identifiers: Vec<Identifier>,
}

impl IdealActivityCoefficients {
    pub fn new<C: GroupCount>(chemicals: &[C]) -> Self {
        Self::from_identifiers(chemicals.iter().map(|c| c.identifier().into_owned()).collect())
    }

    pub fn from_identifiers(identifiers: Vec<Identifier>) -> Self {
        Self { identifiers }
    }
}

impl ActivityCoefficients for IdealActivityCoefficients {
    fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    /// Returns ones for any input, including compositions that do not match
    /// the number of chemicals.
    fn activity_coefficients(
        &self,
        molefracs: &Array1<f64>,
        _temperature: f64,
    ) -> ActivityResult<Array1<f64>> {
        Ok(Array1::ones(molefracs.len()))
    }
}

impl fmt::Display for IdealActivityCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_chemicals(f, "IdealActivityCoefficients", &self.identifiers)
    }
}
