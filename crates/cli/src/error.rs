//! Error taxonomy for a generation run.
//!
//! Every pipeline stage surfaces its error to the run controller
//! immediately; there is no local recovery or retry at any stage. The CLI
//! boundary renders the error as a single red line on stderr and exits 1.

use thiserror::Error;

/// Failure modes of a single generation run, one variant per stage.
#[derive(Debug, Error)]
pub enum GenError {
    /// A user-supplied URL, type name or path failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The HTTP request failed or returned a non-success status.
    #[error("API request failed: {0}")]
    Fetch(String),

    /// The response body was not well-formed JSON.
    #[error("failed to parse response as JSON: {0}")]
    Parse(String),

    /// The payload held no representative value to infer a type from
    /// (an empty top-level array).
    #[error("the API returned an empty list, so there is no sample to infer types from")]
    EmptySample,

    /// Type inference produced zero declaration lines.
    #[error("type generation produced no declarations, check the API response")]
    EmptyResult,

    /// The output file or its directory could not be written.
    #[error("failed to write output: {0}")]
    Write(String),
}
