use crate::ActivityResult;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Van der Waals parameters of a structural subgroup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubgroupRecord {
    pub id: u32,
    pub name: String,
    pub main_group: u32,
    /// Volume parameter
    pub r: f64,
    /// Surface area parameter
    pub q: f64,
}

impl SubgroupRecord {
    /// Creates a new `SubgroupRecord`.
    pub fn new(id: u32, name: &str, main_group: u32, r: f64, q: f64) -> Self {
        Self {
            id,
            name: name.into(),
            main_group,
            r,
            q,
        }
    }

    /// Read a list of `SubgroupRecord`s from a JSON file.
    pub fn from_json<P: AsRef<Path>>(file: P) -> ActivityResult<Vec<Self>> {
        Ok(serde_json::from_reader(BufReader::new(File::open(file)?))?)
    }
}

impl std::fmt::Display for SubgroupRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SubgroupRecord(id={}, name={}, main_group={}, r={}, q={})",
            self.id, self.name, self.main_group, self.r, self.q
        )
    }
}

/// All subgroups of a group contribution method, indexed by subgroup id.
#[derive(Debug, Clone, Default)]
pub struct SubgroupTable(IndexMap<u32, SubgroupRecord>);

impl SubgroupTable {
    pub fn new(records: Vec<SubgroupRecord>) -> Self {
        Self(records.into_iter().map(|r| (r.id, r)).collect())
    }

    pub fn get(&self, id: u32) -> Option<&SubgroupRecord> {
        self.0.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubgroupRecord> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
