//! TypeScript declaration synthesis from a JSON sample.
//!
//! The pipeline hands this module one representative JSON value and a root
//! type name; it returns the finished declaration lines, ready to be joined
//! with newlines and written to disk.

mod emit;
mod infer;
mod types;
mod utils;

use serde_json::Value;

use crate::error::GenError;
use emit::Emit;
use infer::infer_module;

/// Synthesize TypeScript declarations for `sample`, rooted at `type_name`.
///
/// Output is deterministic: interface properties are alphabetized, union
/// variants keep first-observed order with `null` last, and the same sample
/// always produces the same lines.
pub fn synthesize(sample: &Value, type_name: &str) -> Result<Vec<String>, GenError> {
    let module = infer_module(sample, type_name);
    let rendered = module.emit();
    let lines: Vec<String> = rendered
        .trim_end()
        .lines()
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        return Err(GenError::EmptyResult);
    }

    tracing::debug!(type_name, line_count = lines.len(), "synthesized declarations");
    Ok(lines)
}
