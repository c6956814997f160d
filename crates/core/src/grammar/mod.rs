/// Parsed parameter representation.
pub mod ast;
/// Constraint scanner — state machine over the post-name remainder.
pub mod constraint;
/// JSON serialization helpers for parsed parameters.
pub mod dump;
/// Parameter emitter — converts a parsed parameter back to template text.
pub mod emit;
/// Parameter scanner — parses one parameter specification.
pub mod parser;
