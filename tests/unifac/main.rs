mod binary;
mod properties;
mod records;

use gc_activity::parameter::{ChemicalRecord, IdentifierOption};
use gc_activity::ActivityResult;

pub fn chemicals(substances: &[&str]) -> ActivityResult<Vec<ChemicalRecord>> {
    ChemicalRecord::from_json(
        substances,
        "parameters/unifac/chemicals.json",
        IdentifierOption::Id,
    )
}
