use std::io;
use thiserror::Error;

/// Error type for incomplete group information, invalid input and IO problems.
#[derive(Error, Debug)]
pub enum ActivityError {
    // errors related to the group decomposition
    #[error("{chemical} has no defined {method} groups.")]
    MissingGroupData { chemical: String, method: String },
    #[error("Missing parameters: {0}")]
    MissingParameters(String),

    // errors related to invalid input
    #[error(
        "Activity coefficients are initialized for {0} components while the input specifies {1} components."
    )]
    IncompatibleComponents(usize, usize),
    #[error("Invalid state in {0}: {1} = {2}.")]
    InvalidState(String, String, f64),

    // errors related to file handling
    #[error(transparent)]
    FileIO(#[from] io::Error),

    // json errors
    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    // errors related to parameter handling
    #[error("The following component(s) were not found: {0}")]
    ComponentsNotFound(String),
    #[error("Incompatible parameters: {0}")]
    IncompatibleParameters(String),
}

/// Convenience type for `Result<T, ActivityError>`.
pub type ActivityResult<T> = Result<T, ActivityError>;
