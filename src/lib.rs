//! Liquid phase activity coefficients from group contribution methods.
//!
//! The chemicals of a mixture are decomposed into structural subgroups. From
//! the volume and surface parameters of the subgroups and the interaction
//! parameters between their main groups, the [UNIFAC](unifac) method and
//! its modification (Dortmund) estimate the activity coefficients at a given
//! composition and temperature.
//!
//! Building the group arrays of a mixture is expensive compared to the
//! evaluation of the activity coefficients, so the parameters are shared
//! through an explicit [ParameterCache].
#![warn(clippy::all)]

mod activity;
pub mod cache;
mod errors;
pub mod ideal;
pub mod parameter;
pub mod unifac;

pub use activity::{ActivityCoefficients, Contributions};
pub use cache::ParameterCache;
pub use errors::{ActivityError, ActivityResult};
pub use ideal::IdealActivityCoefficients;
pub use unifac::{GroupActivityCoefficients, GroupTables, Method, UnifacParameters};
