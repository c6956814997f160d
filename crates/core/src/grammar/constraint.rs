//! Constraint scanner — splits the post-name remainder of a parameter
//! specification into its ordered constraint references.
//!
//! A single forward pass over byte positions replaces what would otherwise
//! need a backtracking pattern-matcher: when a `:` or `=` is seen inside an
//! open parenthesis group, a bounded forward search decides whether the
//! group ever closes. If it does, the run up to the closing `)` is opaque
//! nested content and the delimiter is not a terminator; if it does not,
//! the group is deemed unbalanced and the delimiter is real.

use super::ast::{ConstraintSpec, Span};

/// Result of a constraint scan: the captured constraints and the position
/// where scanning stopped.
///
/// The caller inspects `cursor` to decide whether a default value follows:
/// when the scan stopped at a top-level `=`, `cursor` points at that `=`;
/// when the whole span was consumed, `cursor` is past `stop`.
#[derive(Debug)]
pub struct ConstraintScan {
    /// Captured constraints in order of appearance.
    pub constraints: Vec<ConstraintSpec>,
    /// Byte position handed back to the caller.
    pub cursor: usize,
}

/// Scanner states. The terminal `End` state of the transition table is
/// expressed as breaking out of the scan loop with the hand-back cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between constraints, or re-reading the character handed back by name
    /// extraction; only `:`, `(`, and `=` cause transitions.
    Start,
    /// Accumulating a constraint name after a `:`.
    ParsingName,
    /// Accumulating a parenthesis argument group.
    InsideParenthesis,
}

/// Scan `text[cursor..stop]` for constraint references.
///
/// `cursor` may point one position before the first delimiter (the caller
/// hands back the character preceding the `:`/`=` that ended the name);
/// anything there other than `:`, `(`, or `=` is skipped without effect.
/// `stop` is the exclusive end of the effective span — it excludes a
/// stripped trailing `?` — and is clamped to `text.len()`. Both positions
/// must lie on character boundaries of `text` (every position qualifies
/// for ASCII text; the parameter scanner only hands over boundaries).
///
/// The scan is total and linear: the forward search for a closing `)` is
/// bounded by the span and never recurses. All decision characters are
/// ASCII, so byte positions never split a UTF-8 sequence and every
/// captured span lies on character boundaries.
pub fn scan_constraints(text: &str, cursor: usize, stop: usize) -> ConstraintScan {
    let bytes = text.as_bytes();
    let stop = stop.min(bytes.len());
    let mut constraints = Vec::new();
    let mut state = State::Start;
    let mut span_start = cursor;
    let mut i = cursor;

    let cursor = loop {
        let cur = if i < stop { Some(bytes[i]) } else { None };
        match state {
            State::Start => match cur {
                None => break i + 1,
                Some(b':') => {
                    state = State::ParsingName;
                    span_start = i + 1;
                }
                Some(b'(') => {
                    state = State::InsideParenthesis;
                    span_start = i;
                }
                // Hand the `=` back to the caller: it starts the default value.
                Some(b'=') => break i,
                Some(_) => {}
            },
            State::ParsingName => match cur {
                None => {
                    push_nonempty(&mut constraints, text, span_start, i);
                    break i + 1;
                }
                Some(b':') => {
                    // Chained bare names; empty segments (`::`) are dropped.
                    push_nonempty(&mut constraints, text, span_start, i);
                    span_start = i + 1;
                }
                Some(b'(') => state = State::InsideParenthesis,
                Some(b'=') => {
                    push_nonempty(&mut constraints, text, span_start, i);
                    break i;
                }
                Some(_) => {}
            },
            State::InsideParenthesis => match cur {
                None => {
                    push(&mut constraints, text, span_start, i);
                    break i + 1;
                }
                Some(b')') => {
                    // `)` terminates the group only when followed by the end
                    // of the span, a new constraint, or the default value.
                    // Any other follower makes it ordinary content.
                    let peek = if i + 1 < stop { Some(bytes[i + 1]) } else { None };
                    match peek {
                        None => {
                            push(&mut constraints, text, span_start, i + 1);
                            break i + 1;
                        }
                        Some(b':') => {
                            push(&mut constraints, text, span_start, i + 1);
                            state = State::Start;
                            span_start = i + 1;
                        }
                        Some(b'=') => {
                            push(&mut constraints, text, span_start, i + 1);
                            break i + 1;
                        }
                        Some(_) => {}
                    }
                }
                Some(c @ (b':' | b'=')) => {
                    match find_closing(bytes, i + 1, stop) {
                        // The group closes ahead: everything up to that `)`
                        // is opaque nested content. Jump past it and keep
                        // scanning for the enclosing group's terminator.
                        Some(close) => i = close,
                        // The group never closes: fall back to treating the
                        // delimiter as real. The open fragment is captured
                        // without it.
                        None => {
                            push(&mut constraints, text, span_start, i);
                            if c == b':' {
                                state = State::ParsingName;
                                span_start = i + 1;
                            } else {
                                break i;
                            }
                        }
                    }
                }
                Some(_) => {}
            },
        }
        i += 1;
    };

    ConstraintScan {
        constraints,
        cursor,
    }
}

/// Capture `text[start..end]` as a constraint.
fn push(out: &mut Vec<ConstraintSpec>, text: &str, start: usize, end: usize) {
    out.push(ConstraintSpec {
        text: text[start..end].to_string(),
        span: Span::new(start, end),
    });
}

/// Capture `text[start..end]` unless the range is empty.
fn push_nonempty(out: &mut Vec<ConstraintSpec>, text: &str, start: usize, end: usize) {
    if end > start {
        push(out, text, start, end);
    }
}

/// Position of the next `)` in `bytes[from..stop]`, if any.
fn find_closing(bytes: &[u8], from: usize, stop: usize) -> Option<usize> {
    (from..stop).find(|&i| bytes[i] == b')')
}
