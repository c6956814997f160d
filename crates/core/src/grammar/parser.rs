//! Parameter scanner — parses one route template parameter specification.
//!
//! Input is the text between the delimiter braces of a routing pattern,
//! e.g. `id:int:range(1,10)=5`, `*slug`, or `**path?`, already isolated by
//! the template tokenizer. The scanner strips the catch-all and optional
//! markers, extracts the parameter name, delegates the remainder to the
//! constraint scanner, and finally extracts the default value.
//!
//! Parsing is total: malformed input degrades to a well-defined result
//! instead of failing. Deciding whether a degraded result is acceptable is
//! the caller's responsibility.

use super::ast::ParsedParameter;
use super::constraint::scan_constraints;

/// Parse a single route template parameter specification.
///
/// # Examples
///
/// ```
/// use routegen_core::parse_parameter;
///
/// let part = parse_parameter("id:int:range(1,10)=5");
/// assert_eq!(part.name, "id");
/// assert_eq!(part.constraints[0].text, "int");
/// assert_eq!(part.constraints[1].text, "range(1,10)");
/// assert_eq!(part.default_value.as_deref(), Some("5"));
///
/// let part = parse_parameter("**path?");
/// assert!(part.is_catch_all);
/// assert!(part.is_optional);
/// assert_eq!(part.name, "path");
/// ```
///
/// # Safety of byte indexing
///
/// Every decision character (`*`, `?`, `:`, `=`, `(`, `)`) is ASCII. UTF-8
/// continuation bytes are in `0x80..=0xBF` and never match any of them, so
/// scanning bytes is safe without full UTF-8 decoding and every substring
/// boundary lands on a character boundary.
pub fn parse_parameter(input: &str) -> ParsedParameter {
    if input.is_empty() {
        return ParsedParameter::default();
    }

    let bytes = input.as_bytes();
    let mut start = 0usize;
    // Exclusive end of the effective span; shrinks when `?` is stripped.
    let mut stop = input.len();
    let mut is_catch_all = false;
    let mut is_optional = false;

    if input.starts_with("**") {
        is_catch_all = true;
        start += 2;
    } else if bytes[0] == b'*' {
        is_catch_all = true;
        start += 1;
    }

    // `?` binds to the very end of the whole parameter text, independent of
    // the catch-all marker; both may apply.
    if bytes[stop - 1] == b'?' {
        is_optional = true;
        stop -= 1;
    }

    // ── Name ────────────────────────────────────────────────────────────
    // The name ends at the first `:` or `=` past the span start. A
    // delimiter in the very first position is part of the name instead, so
    // `:foo` and `=bar` are names rather than an empty name followed by a
    // constraint or default. On a delimiter at `p`, scanning resumes at
    // `p - 1`: the constraint scanner re-reads that character, which is
    // observable when it is `(`.
    let mut name = "";
    let mut cursor = stop;
    for i in start..stop {
        let c = bytes[i];
        if (c == b':' || c == b'=') && i != start {
            name = &input[start..i];
            cursor = i - 1;
            break;
        }
        if i + 1 == stop {
            name = &input[start..stop];
        }
    }

    // ── Constraints ─────────────────────────────────────────────────────
    let scan = scan_constraints(input, cursor, stop);

    // ── Default value ───────────────────────────────────────────────────
    // Present iff the scan stopped on a top-level `=`; the value runs to
    // the end of the effective span and may be empty.
    let default_value = if scan.cursor < stop && bytes[scan.cursor] == b'=' {
        Some(input[scan.cursor + 1..stop].to_string())
    } else {
        None
    };

    ParsedParameter {
        raw: input.to_string(),
        name: name.to_string(),
        is_catch_all,
        is_optional,
        default_value,
        constraints: scan.constraints,
    }
}
