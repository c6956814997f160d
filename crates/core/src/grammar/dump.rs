use super::ast::ParsedParameter;

/// Serialize a parsed parameter to a pretty-printed JSON string.
pub fn to_pretty_json(part: &ParsedParameter) -> String {
    serde_json::to_string_pretty(part).expect("ParsedParameter serialization cannot fail")
}
