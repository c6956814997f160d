//! Shared test helpers for `routegen_core` integration tests.

#![allow(unreachable_pub)]

use routegen_core::ParsedParameter;

/// Collect constraint texts (in order) from a parsed parameter.
#[allow(dead_code)]
pub fn constraint_texts(part: &ParsedParameter) -> Vec<&str> {
    part.constraints.iter().map(|c| c.text.as_str()).collect()
}

/// The span-insensitive signature of a parse: name, flags, and constraint
/// texts. Raw text and spans are excluded so parses of two serializations
/// of the same parameter can be compared.
#[allow(dead_code)]
pub fn signature(part: &ParsedParameter) -> (String, bool, bool, Vec<String>) {
    (
        part.name.clone(),
        part.is_catch_all,
        part.is_optional,
        part.constraints.iter().map(|c| c.text.clone()).collect(),
    )
}
