use crate::ActivityResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Interaction parameters between two main groups.
///
/// The original UNIFAC method only uses `a`; the modified UNIFAC (Dortmund)
/// uses the temperature dependent form `a/T + b + c*T`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct InteractionRecord {
    pub main_group1: u32,
    pub main_group2: u32,
    pub a: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(default)]
    pub c: f64,
}

impl InteractionRecord {
    /// Creates a new `InteractionRecord`.
    pub fn new(main_group1: u32, main_group2: u32, a: f64, b: f64, c: f64) -> Self {
        Self {
            main_group1,
            main_group2,
            a,
            b,
            c,
        }
    }

    /// Read a list of `InteractionRecord`s from a JSON file.
    pub fn from_json<P: AsRef<Path>>(file: P) -> ActivityResult<Vec<Self>> {
        Ok(serde_json::from_reader(BufReader::new(File::open(file)?))?)
    }
}

impl std::fmt::Display for InteractionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "InteractionRecord(main_group1={}, main_group2={}, a={}, b={}, c={})",
            self.main_group1, self.main_group2, self.a, self.b, self.c
        )
    }
}

/// Interaction parameters of a group contribution method keyed by the
/// ordered pair of main groups.
///
/// The parameters are not symmetric: the entry for `(m, n)` is generally
/// different from the one for `(n, m)`.
#[derive(Debug, Clone, Default)]
pub struct InteractionTable(HashMap<(u32, u32), [f64; 3]>);

impl InteractionTable {
    pub fn new(records: Vec<InteractionRecord>) -> Self {
        Self(
            records
                .into_iter()
                .map(|r| ((r.main_group1, r.main_group2), [r.a, r.b, r.c]))
                .collect(),
        )
    }

    pub fn get(&self, main_group1: u32, main_group2: u32) -> Option<[f64; 3]> {
        self.0.get(&(main_group1, main_group2)).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<InteractionRecord> for InteractionTable {
    fn from_iter<I: IntoIterator<Item = InteractionRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
