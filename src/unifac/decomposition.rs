use super::Method;
use crate::parameter::GroupCount;
use crate::{ActivityError, ActivityResult};
use indexmap::IndexMap;
use ndarray::Array2;
use std::borrow::Cow;

/// Subgroup counts of a chemical for the given method.
///
/// Fails if the chemical has no (or an empty) decomposition for `method`.
pub fn decompose<C: GroupCount>(
    chemical: &C,
    method: Method,
) -> ActivityResult<Cow<'_, IndexMap<u32, usize>>> {
    match chemical.group_count(method) {
        Some(groups) if !groups.is_empty() => Ok(groups),
        _ => Err(ActivityError::MissingGroupData {
            chemical: chemical.identifier().id.clone(),
            method: method.to_string(),
        }),
    }
}

/// Union of all subgroups in the chemicals (in order of first occurence)
/// and the matrix of subgroup counts with one row per chemical.
pub fn occurrence_matrix<C: GroupCount>(
    chemicals: &[C],
    method: Method,
) -> ActivityResult<(IndexMap<u32, usize>, Array2<f64>)> {
    let decompositions = chemicals
        .iter()
        .map(|c| decompose(c, method))
        .collect::<ActivityResult<Vec<_>>>()?;

    let mut group_index = IndexMap::new();
    for groups in decompositions.iter() {
        for &id in groups.keys() {
            let n = group_index.len();
            group_index.entry(id).or_insert(n);
        }
    }

    let mut chemgroups = Array2::zeros((chemicals.len(), group_index.len()));
    for (i, groups) in decompositions.iter().enumerate() {
        for (id, &count) in groups.iter() {
            chemgroups[(i, group_index[id])] = count as f64;
        }
    }
    Ok((group_index, chemgroups))
}
