use crate::parameter::Identifier;
use crate::ActivityResult;
use ndarray::Array1;

/// Individual contributions to the activity coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Contributions {
    Combinatorial,
    Residual,
    #[default]
    Total,
}

/// Models for the liquid phase activity coefficients of a fixed, ordered
/// set of chemicals.
pub trait ActivityCoefficients {
    /// Identifiers of the chemicals in the order expected by the composition.
    fn identifiers(&self) -> &[Identifier];

    /// Number of chemicals.
    fn components(&self) -> usize {
        self.identifiers().len()
    }

    /// Activity coefficients at the liquid mole fractions `molefracs` and
    /// temperature `temperature` (in K).
    fn activity_coefficients(
        &self,
        molefracs: &Array1<f64>,
        temperature: f64,
    ) -> ActivityResult<Array1<f64>>;
}

/// Writes `name([id1, id2, ...])`.
pub(crate) fn fmt_chemicals(
    f: &mut std::fmt::Formatter<'_>,
    name: &str,
    identifiers: &[Identifier],
) -> std::fmt::Result {
    let ids: Vec<_> = identifiers.iter().map(|i| i.id.as_str()).collect();
    write!(f, "{}([{}])", name, ids.join(", "))
}
