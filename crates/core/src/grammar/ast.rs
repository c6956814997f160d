use serde::{Deserialize, Serialize};

// ── Span ────────────────────────────────────────────────────────────────

/// Byte span in the raw parameter text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first character (0-based).
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl Span {
    /// Create a span covering `[start, end)`.
    ///
    /// Panics if `end < start`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(end >= start, "Span end ({end}) < start ({start})");
        Self { start, end }
    }

    /// Create a zero-width span at the given position.
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// ── ConstraintSpec ──────────────────────────────────────────────────────

/// One constraint reference attached to a parameter, verbatim.
///
/// `text` is exactly the substring captured from the raw input — a bare
/// constraint name like `"int"`, or a name with its argument group like
/// `"range(1,10)"`, parentheses included. `raw[span.start..span.end]`
/// always equals `text`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConstraintSpec {
    /// Exact constraint text, including any parenthesis group.
    pub text: String,
    /// Location of `text` within the raw parameter input.
    pub span: Span,
}

impl ConstraintSpec {
    /// The constraint name: everything before the first `(`.
    ///
    /// Returns the whole text for a bare constraint, and an empty string
    /// for a nameless group such as `"(1,10)"`.
    pub fn name(&self) -> &str {
        match self.text.find('(') {
            Some(p) => &self.text[..p],
            None => &self.text,
        }
    }

    /// The argument text of the parenthesis group, if the constraint has one.
    ///
    /// The trailing `)` is stripped when the group is terminated. An
    /// unterminated group (possible under the unbalanced-parenthesis
    /// fallback) yields everything after the `(` as-is. The content is
    /// returned purely lexically; whether it is meaningful for the named
    /// constraint is the consumer's concern.
    pub fn args(&self) -> Option<&str> {
        let open = self.text.find('(')?;
        let inner = &self.text[open + 1..];
        Some(inner.strip_suffix(')').unwrap_or(inner))
    }
}

// ── ParsedParameter ─────────────────────────────────────────────────────

/// The structured description of one route template parameter.
///
/// Produced by [`parse_parameter`](crate::grammar::parser::parse_parameter)
/// and handed to the downstream route generator. Constructed once per parse
/// and never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedParameter {
    /// The original, unmodified parameter text (possibly empty).
    pub raw: String,
    /// Extracted parameter name, without the `*`/`**` catch-all prefix or
    /// the trailing `?` optional marker. May itself begin with `:` or `=`.
    pub name: String,
    /// Whether the parameter matches trailing path segments (`*` or `**`
    /// prefix on the raw text).
    pub is_catch_all: bool,
    /// Whether the parameter may be absent from the matched path (trailing
    /// `?` on the raw text).
    pub is_optional: bool,
    /// Fallback value introduced by a top-level `=`; may be an empty string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Constraint references in left-to-right order of appearance.
    pub constraints: Vec<ConstraintSpec>,
}
