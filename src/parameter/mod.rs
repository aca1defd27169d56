//! Records consumed from the chemical registry and the reference tables of
//! the group contribution methods.

mod chemical_record;
mod identifier;
mod interaction;
mod subgroup;

pub use chemical_record::{ChemicalRecord, GroupCount};
pub use identifier::{Identifier, IdentifierOption};
pub use interaction::{InteractionRecord, InteractionTable};
pub use subgroup::{SubgroupRecord, SubgroupTable};
