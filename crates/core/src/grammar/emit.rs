//! Parameter emitter — converts a parsed parameter back into template text.
//!
//! The canonical serialization places the catch-all marker first, then the
//! name, each constraint prefixed by `:`, the default value prefixed by
//! `=`, and the optional `?` marker last. `?` always terminates the
//! parameter text — it is stripped before anything else when parsing — so
//! it must follow the default value even though the marker logically
//! belongs to the name.

use super::ast::ParsedParameter;

/// Serialize a parsed parameter back into parameter-specification text.
///
/// Re-parsing the returned text yields the same name, flags, constraint
/// list, and default value for any record produced from well-formed input.
/// The `**` form of the catch-all marker is not preserved — the parsed
/// record keeps a single flag — so a double-star parameter serializes with
/// one `*` and re-parses to an identical record.
pub fn emit_parameter(part: &ParsedParameter) -> String {
    let mut out = String::with_capacity(part.raw.len().max(8));
    if part.is_catch_all {
        out.push('*');
    }
    out.push_str(&part.name);
    for constraint in &part.constraints {
        out.push(':');
        out.push_str(&constraint.text);
    }
    if let Some(default) = &part.default_value {
        out.push('=');
        out.push_str(default);
    }
    if part.is_optional {
        out.push('?');
    }
    out
}
