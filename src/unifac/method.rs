use super::data::{DORTMUND, UNIFAC};
use super::{combinatorial, residual};
use crate::parameter::{InteractionRecord, InteractionTable, SubgroupRecord, SubgroupTable};
use crate::ActivityResult;
use ndarray::{Array1, Array2, Array3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

type CombinatorialFn = fn(&Array1<f64>, &Array1<f64>, &Array1<f64>) -> Array1<f64>;
type PsiFn = fn(f64, &Array3<f64>) -> Array2<f64>;

/// Group contribution method used to estimate activity coefficients.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Original UNIFAC with a single temperature independent
    /// interaction parameter per pair of main groups.
    #[serde(rename = "UNIFAC")]
    Unifac,
    /// Modified UNIFAC (Dortmund) with temperature dependent interaction
    /// parameters and a modified combinatorial term.
    Dortmund,
}

impl Method {
    /// Interaction parameters that leave a pair of groups unaffected.
    pub fn no_interaction(self) -> [f64; 3] {
        [0.0; 3]
    }

    /// The bundled reference tables of the method.
    pub fn tables(self) -> Arc<GroupTables> {
        match self {
            Self::Unifac => UNIFAC.clone(),
            Self::Dortmund => DORTMUND.clone(),
        }
    }

    pub(crate) fn combinatorial(self) -> CombinatorialFn {
        match self {
            Self::Unifac => combinatorial::ln_gamma_unifac,
            Self::Dortmund => combinatorial::ln_gamma_dortmund,
        }
    }

    pub(crate) fn psi(self) -> PsiFn {
        match self {
            Self::Unifac => residual::psi_unifac,
            Self::Dortmund => residual::psi_dortmund,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unifac => write!(f, "UNIFAC"),
            Self::Dortmund => write!(f, "Dortmund"),
        }
    }
}

/// Subgroup and interaction parameters of a group contribution method.
#[derive(Debug, Clone)]
pub struct GroupTables {
    pub method: Method,
    pub subgroups: SubgroupTable,
    pub interactions: InteractionTable,
}

impl GroupTables {
    pub fn new(
        method: Method,
        subgroups: Vec<SubgroupRecord>,
        interactions: Vec<InteractionRecord>,
    ) -> Self {
        Self {
            method,
            subgroups: SubgroupTable::new(subgroups),
            interactions: InteractionTable::new(interactions),
        }
    }

    /// Read custom subgroup and interaction parameters from json files.
    pub fn from_json<P: AsRef<Path>>(
        method: Method,
        file_subgroups: P,
        file_interactions: P,
    ) -> ActivityResult<Self> {
        Ok(Self::new(
            method,
            SubgroupRecord::from_json(file_subgroups)?,
            InteractionRecord::from_json(file_interactions)?,
        ))
    }

    /// The bundled original UNIFAC tables.
    pub fn unifac() -> Arc<Self> {
        Method::Unifac.tables()
    }

    /// The bundled modified UNIFAC (Dortmund) tables.
    pub fn dortmund() -> Arc<Self> {
        Method::Dortmund.tables()
    }

    /// Interaction parameters between two main groups.
    ///
    /// Returns `None` if the pair of distinct main groups is not tabulated.
    pub fn interaction(&self, main_group1: u32, main_group2: u32) -> Option<[f64; 3]> {
        if main_group1 == main_group2 {
            return Some(self.method.no_interaction());
        }
        self.interactions.get(main_group1, main_group2)
    }
}
