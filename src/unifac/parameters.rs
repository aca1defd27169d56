use super::decomposition::occurrence_matrix;
use super::{GroupTables, Method};
use crate::parameter::{ChemicalRecord, GroupCount, Identifier};
use crate::{ActivityError, ActivityResult};
use indexmap::{IndexMap, IndexSet};
use itertools::iproduct;
use ndarray::{Array1, Array2, Array3, Axis};
use std::fmt::Write;
use tracing::warn;

/// Parameter set of a mixture required for the group contribution methods.
///
/// The rows of all per-chemical arrays follow the order of the chemicals
/// used to build the parameters.
#[derive(Clone, Debug)]
pub struct UnifacParameters {
    pub method: Method,
    pub identifiers: Vec<Identifier>,
    /// Position of every subgroup id in the group arrays.
    pub group_index: IndexMap<u32, usize>,
    pub main_groups: Array1<u32>,
    /// Number of occurences of each group (columns) in each chemical (rows).
    pub chemgroups: Array2<f64>,
    pub r_group: Array1<f64>,
    pub q_group: Array1<f64>,
    pub r: Array1<f64>,
    pub q: Array1<f64>,
    /// Surface fraction of each group within each chemical.
    pub chem_qfractions: Array2<f64>,
    /// Interaction parameters `[a, b, c]` for every ordered pair of groups.
    pub interactions: Array3<f64>,
    /// `true` where both groups occur together in at least one chemical.
    pub availability_mask: Array2<bool>,
    missing_interactions: Vec<(u32, u32)>,
}

impl UnifacParameters {
    /// Build the parameters of the mixture of `chemicals` from `tables`.
    pub fn new<C: GroupCount>(chemicals: &[C], tables: &GroupTables) -> ActivityResult<Self> {
        let method = tables.method;
        let identifiers: Vec<_> = chemicals
            .iter()
            .map(|c| c.identifier().into_owned())
            .collect();
        let (group_index, chemgroups) = occurrence_matrix(chemicals, method)?;

        let subgroups = group_index
            .keys()
            .map(|&id| {
                tables.subgroups.get(id).ok_or_else(|| {
                    ActivityError::MissingParameters(format!("{} subgroup {}", method, id))
                })
            })
            .collect::<ActivityResult<Vec<_>>>()?;
        let main_groups: Array1<u32> = subgroups.iter().map(|s| s.main_group).collect();
        let r_group: Array1<f64> = subgroups.iter().map(|s| s.r).collect();
        let q_group: Array1<f64> = subgroups.iter().map(|s| s.q).collect();

        let r = chemgroups.dot(&r_group);
        let q = chemgroups.dot(&q_group);

        let chem_q = &chemgroups * &q_group;
        let chem_q_sum = chem_q.sum_axis(Axis(1));
        if let Some(i) = chem_q_sum.iter().position(|&s| s <= 0.0 || !s.is_finite()) {
            return Err(ActivityError::IncompatibleParameters(format!(
                "{} groups of {} have no surface area",
                method, identifiers[i].id
            )));
        }
        let chem_qfractions = chem_q / &chem_q_sum.insert_axis(Axis(1));

        let n = group_index.len();
        let mut interactions = Array3::zeros((n, n, 3));
        let mut missing = IndexSet::new();
        for (i, j) in iproduct!(0..n, 0..n) {
            let (m1, m2) = (main_groups[i], main_groups[j]);
            let parameters = tables.interaction(m1, m2).unwrap_or_else(|| {
                missing.insert((m1, m2));
                method.no_interaction()
            });
            for (k, &p) in parameters.iter().enumerate() {
                interactions[(i, j, k)] = p;
            }
        }
        for (m1, m2) in missing.iter() {
            warn!(
                "No {} interaction parameters between main groups {} and {}. The groups are assumed to not interact.",
                method, m1, m2
            );
        }

        let mut availability_mask = Array2::from_elem((n, n), false);
        for row in chem_qfractions.outer_iter() {
            let present: Vec<_> = row
                .iter()
                .enumerate()
                .filter(|(_, &f)| f != 0.0)
                .map(|(g, _)| g)
                .collect();
            for (&g1, &g2) in iproduct!(present.iter(), present.iter()) {
                availability_mask[(g1, g2)] = true;
            }
        }

        Ok(Self {
            method,
            identifiers,
            group_index,
            main_groups,
            chemgroups,
            r_group,
            q_group,
            r,
            q,
            chem_qfractions,
            interactions,
            availability_mask,
            missing_interactions: missing.into_iter().collect(),
        })
    }

    /// Number of chemicals.
    pub fn components(&self) -> usize {
        self.identifiers.len()
    }

    /// Number of distinct subgroups in the mixture.
    pub fn groups(&self) -> usize {
        self.group_index.len()
    }

    /// Ordered pairs of main groups in the mixture for which no
    /// interaction parameters are tabulated.
    pub fn missing_interactions(&self) -> &[(u32, u32)] {
        &self.missing_interactions
    }

    /// The group decomposition of each chemical as chemical records.
    pub fn chemical_records(&self) -> Vec<ChemicalRecord> {
        self.identifiers
            .iter()
            .zip(self.chemgroups.outer_iter())
            .map(|(identifier, row)| {
                let groups: IndexMap<u32, usize> = self
                    .group_index
                    .iter()
                    .filter(|(_, &g)| row[g] > 0.0)
                    .map(|(&id, &g)| (id, row[g] as usize))
                    .collect();
                let (unifac, dortmund) = match self.method {
                    Method::Unifac => (Some(groups), None),
                    Method::Dortmund => (None, Some(groups)),
                };
                ChemicalRecord::new(identifier.clone(), unifac, dortmund)
            })
            .collect()
    }
}

impl std::fmt::Display for UnifacParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut o = String::new();
        write!(o, "UnifacParameters(\n\tmethod={}", self.method)?;
        write!(
            o,
            "\n\tchemicals=[{}]",
            self.identifiers
                .iter()
                .map(|i| i.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )?;
        write!(o, "\n\tsubgroups={:?}", self.group_index.keys())?;
        write!(o, "\n\tr={}", self.r)?;
        write!(o, "\n\tq={}", self.q)?;
        write!(o, "\n)")?;
        write!(f, "{}", o)
    }
}
