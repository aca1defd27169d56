//! Activity coefficients from the UNIFAC group contribution method and its
//! modification by [Gmehling et al. (1993)](https://doi.org/10.1021/ie00018a014)
//! (Dortmund).
//!
//! The activity coefficient of chemical `i` is split into a combinatorial
//! part that accounts for differences in size and shape of the molecules and a
//! residual part that accounts for the interactions between structural groups:
//!
//! `ln(gamma_i) = ln(gamma_i^C) + ln(gamma_i^R)`
use crate::activity::fmt_chemicals;
use crate::cache::ParameterCache;
use crate::parameter::{GroupCount, Identifier};
use crate::{ActivityCoefficients, ActivityError, ActivityResult, Contributions};
use ndarray::{Array1, Array2, Zip};
use std::fmt;
use std::sync::Arc;

pub mod combinatorial;
mod data;
pub mod decomposition;
mod method;
mod parameters;
pub mod residual;

pub use method::{GroupTables, Method};
pub use parameters::UnifacParameters;

/// Activity coefficients from a group contribution method for a fixed,
/// ordered set of chemicals.
///
/// # Examples
///
/// ```
/// # use gc_activity::parameter::{ChemicalRecord, Identifier};
/// # use gc_activity::{ActivityCoefficients, ActivityResult, GroupActivityCoefficients, ParameterCache};
/// # use indexmap::indexmap;
/// # use ndarray::arr1;
/// # fn main() -> ActivityResult<()> {
/// let ethanol = ChemicalRecord::new(
///     Identifier::new("Ethanol"),
///     Some(indexmap! {1 => 1, 2 => 1, 14 => 1}),
///     None,
/// );
/// let water = ChemicalRecord::new(Identifier::new("Water"), Some(indexmap! {16 => 1}), None);
/// let cache = ParameterCache::new();
/// let unifac = GroupActivityCoefficients::unifac(&[ethanol, water], &cache)?;
/// let gamma = unifac.activity_coefficients(&arr1(&[0.5, 0.5]), 298.15)?;
/// assert!((gamma[0] - 1.2037).abs() < 1e-4);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct GroupActivityCoefficients {
    parameters: Arc<UnifacParameters>,
    tables: Arc<GroupTables>,
}

impl GroupActivityCoefficients {
    /// Creates the activity coefficient model for `chemicals`.
    ///
    /// The mixture parameters are taken from `cache` if the same chemicals
    /// in the same order were used before with the same `tables`.
    pub fn new<C: GroupCount>(
        chemicals: &[C],
        tables: Arc<GroupTables>,
        cache: &ParameterCache,
    ) -> ActivityResult<Self> {
        let identifiers = chemicals
            .iter()
            .map(|c| c.identifier().into_owned())
            .collect();
        let parameters = cache.get_or_try_insert_with(&tables, identifiers, || {
            UnifacParameters::new(chemicals, &tables)
        })?;
        Ok(Self { parameters, tables })
    }

    /// Original UNIFAC with the bundled parameters.
    pub fn unifac<C: GroupCount>(chemicals: &[C], cache: &ParameterCache) -> ActivityResult<Self> {
        Self::new(chemicals, GroupTables::unifac(), cache)
    }

    /// Modified UNIFAC (Dortmund) with the bundled parameters.
    pub fn dortmund<C: GroupCount>(
        chemicals: &[C],
        cache: &ParameterCache,
    ) -> ActivityResult<Self> {
        Self::new(chemicals, GroupTables::dortmund(), cache)
    }

    pub fn method(&self) -> Method {
        self.parameters.method
    }

    pub fn parameters(&self) -> &Arc<UnifacParameters> {
        &self.parameters
    }

    /// Model for the chemicals at the positions in `component_list`.
    pub fn subset(
        &self,
        component_list: &[usize],
        cache: &ParameterCache,
    ) -> ActivityResult<Self> {
        let records = self.parameters.chemical_records();
        let chemicals = component_list
            .iter()
            .map(|&i| {
                records.get(i).cloned().ok_or_else(|| {
                    ActivityError::ComponentsNotFound(format!("component index {}", i))
                })
            })
            .collect::<ActivityResult<Vec<_>>>()?;
        Self::new(&chemicals, self.tables.clone(), cache)
    }

    /// Group interaction matrix at the given temperature.
    pub fn psi(&self, temperature: f64) -> Array2<f64> {
        (self.method().psi())(temperature, &self.parameters.interactions)
    }

    /// Group interaction matrix restricted to pairs of groups that occur
    /// together in at least one of the chemicals. Other entries are zero.
    fn group_psi(&self, psi: &Array2<f64>) -> Array2<f64> {
        Zip::from(psi)
            .and(&self.parameters.availability_mask)
            .map_collect(|&v, &available| if available { v } else { 0.0 })
    }

    fn validate(&self, molefracs: &Array1<f64>, temperature: f64) -> ActivityResult<()> {
        if molefracs.len() != self.components() {
            return Err(ActivityError::IncompatibleComponents(
                self.components(),
                molefracs.len(),
            ));
        }
        if !(temperature.is_finite() && temperature > 0.0) {
            return Err(ActivityError::InvalidState(
                self.method().to_string(),
                "temperature".into(),
                temperature,
            ));
        }
        if let Some(&x) = molefracs.iter().find(|x| !(x.is_finite() && **x >= 0.0)) {
            return Err(ActivityError::InvalidState(
                self.method().to_string(),
                "molefracs".into(),
                x,
            ));
        }
        Ok(())
    }

    /// Logarithmic activity coefficients.
    ///
    /// Entries that cannot be evaluated (e.g. for a composition without
    /// any of the groups) are set to zero.
    pub fn ln_activity_coefficients(
        &self,
        molefracs: &Array1<f64>,
        temperature: f64,
        contributions: Contributions,
    ) -> ActivityResult<Array1<f64>> {
        self.validate(molefracs, temperature)?;
        let p = &self.parameters;
        let ln_gamma_c = || (self.method().combinatorial())(&p.q, &p.r, molefracs);
        let ln_gamma_r = || {
            let psi = self.psi(temperature);
            let group_psi = self.group_psi(&psi);
            residual::ln_gamma_residual(
                molefracs,
                &p.chemgroups,
                &p.q_group,
                &p.chem_qfractions,
                &psi,
                &group_psi,
            )
        };
        let ln_gamma = match contributions {
            Contributions::Combinatorial => ln_gamma_c(),
            Contributions::Residual => ln_gamma_r(),
            Contributions::Total => ln_gamma_c() + ln_gamma_r(),
        };
        Ok(ln_gamma.mapv_into(|g| if g.is_finite() { g } else { 0.0 }))
    }
}

impl ActivityCoefficients for GroupActivityCoefficients {
    fn identifiers(&self) -> &[Identifier] {
        &self.parameters.identifiers
    }

    fn activity_coefficients(
        &self,
        molefracs: &Array1<f64>,
        temperature: f64,
    ) -> ActivityResult<Array1<f64>> {
        let ln_gamma = self.ln_activity_coefficients(molefracs, temperature, Contributions::Total)?;
        Ok(ln_gamma.mapv_into(|g| {
            let gamma = g.exp();
            if gamma.is_finite() {
                gamma
            } else {
                1.0
            }
        }))
    }
}

impl fmt::Display for GroupActivityCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = format!("{}ActivityCoefficients", self.method());
        fmt_chemicals(f, &name, self.identifiers())
    }
}
