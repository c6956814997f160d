//! Routegen toolchain core library.
//!
//! Parses a single route-template parameter specification — the text that
//! appears between the delimiter braces of a routing pattern, e.g.
//! `id:int:range(1,10)=5`, `*slug`, `**path?` — into a structured
//! description consumed by the downstream route generator. The main entry
//! point is [`parse_parameter`]; [`emit_parameter`] converts a parsed
//! record back into template text.
//!
//! Each parse is a pure function of the input text: single pass, no
//! backtracking, no I/O, no shared state, and total — malformed input
//! degrades to a well-defined result instead of an error.

#![warn(missing_docs)]

/// Parameter grammar: scanners, parsed representation, emitter, and
/// serialization helpers.
pub mod grammar;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Parser
pub use grammar::parser::parse_parameter;

// Constraint scanner
pub use grammar::constraint::{ConstraintScan, scan_constraints};

// Parsed representation
pub use grammar::ast::{ConstraintSpec, ParsedParameter, Span};

// Emitter
pub use grammar::emit::emit_parameter;

// Serialization helpers
pub use grammar::dump::to_pretty_json;
