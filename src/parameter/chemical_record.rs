use super::{Identifier, IdentifierOption};
use crate::unifac::Method;
use crate::{ActivityError, ActivityResult};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Structural information of a chemical as stored in the registry.
///
/// For every group contribution method the record may contain a map
/// from subgroup id to the number of occurences of that subgroup in
/// the molecule.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChemicalRecord {
    pub identifier: Identifier,
    #[serde(rename = "UNIFAC")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unifac: Option<IndexMap<u32, usize>>,
    #[serde(rename = "Dortmund")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dortmund: Option<IndexMap<u32, usize>>,
}

impl ChemicalRecord {
    /// Create a new `ChemicalRecord`.
    pub fn new(
        identifier: Identifier,
        unifac: Option<IndexMap<u32, usize>>,
        dortmund: Option<IndexMap<u32, usize>>,
    ) -> Self {
        Self {
            identifier,
            unifac,
            dortmund,
        }
    }

    /// Read the records of the given substances from a json file.
    ///
    /// The records are returned in the order of `substances`.
    pub fn from_json<P: AsRef<Path>>(
        substances: &[&str],
        file: P,
        identifier_option: IdentifierOption,
    ) -> ActivityResult<Vec<Self>> {
        let queried: IndexSet<String> = substances.iter().map(|s| s.to_string()).collect();
        if queried.len() != substances.len() {
            return Err(ActivityError::IncompatibleParameters(
                "A substance was defined more than once.".to_string(),
            ));
        }

        let reader = BufReader::new(File::open(file)?);
        let file_records: Vec<Self> = serde_json::from_reader(reader)?;
        let mut record_map: HashMap<String, Self> = file_records
            .into_iter()
            .filter_map(|record| {
                record
                    .identifier
                    .as_string(identifier_option)
                    .map(|id| (id, record))
            })
            .collect();

        let missing: Vec<_> = queried
            .iter()
            .filter(|id| !record_map.contains_key(*id))
            .collect();
        if !missing.is_empty() {
            return Err(ActivityError::ComponentsNotFound(format!("{:?}", missing)));
        }

        Ok(queried
            .iter()
            .filter_map(|id| record_map.remove(id))
            .collect())
    }
}

impl std::fmt::Display for ChemicalRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChemicalRecord(")?;
        write!(f, "\n\tidentifier={},", self.identifier)?;
        if let Some(groups) = &self.unifac {
            write!(f, "\n\tUNIFAC={:?},", groups)?;
        }
        if let Some(groups) = &self.dortmund {
            write!(f, "\n\tDortmund={:?},", groups)?;
        }
        write!(f, "\n)")
    }
}

/// Access to the structural groups of a chemical.
///
/// Implement this trait to use the records of an external chemical registry
/// directly.
pub trait GroupCount {
    fn identifier(&self) -> Cow<'_, Identifier>;

    /// The number of occurences of each subgroup of `method` in the molecule,
    /// or `None` if the decomposition is not available.
    fn group_count(&self, method: Method) -> Option<Cow<'_, IndexMap<u32, usize>>>;
}

impl GroupCount for ChemicalRecord {
    fn identifier(&self) -> Cow<'_, Identifier> {
        Cow::Borrowed(&self.identifier)
    }

    fn group_count(&self, method: Method) -> Option<Cow<'_, IndexMap<u32, usize>>> {
        let groups = match method {
            Method::Unifac => self.unifac.as_ref(),
            Method::Dortmund => self.dortmund.as_ref(),
        };
        groups.map(Cow::Borrowed)
    }
}

impl<T: GroupCount> GroupCount for &T {
    fn identifier(&self) -> Cow<'_, Identifier> {
        (**self).identifier()
    }

    fn group_count(&self, method: Method) -> Option<Cow<'_, IndexMap<u32, usize>>> {
        (**self).group_count(method)
    }
}
