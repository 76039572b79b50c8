use crate::error::JsonGlowError;
use crate::model::{JsonMember, JsonSyntax};

const RECURSION_LIMIT: usize = 100;

/// Converts an in-memory value into a syntax tree without re-scanning
/// text. Literal spellings are generated with serde_json so string
/// escaping matches what a round trip through `to_string` would produce.
pub fn syntax_from_value(value: &serde_json::Value) -> Result<JsonSyntax, JsonGlowError> {
    convert(value, RECURSION_LIMIT)
}

fn convert(value: &serde_json::Value, recursion_limit: usize) -> Result<JsonSyntax, JsonGlowError> {
    if recursion_limit == 0 {
        return Err(JsonGlowError::DepthLimitExceeded);
    }

    let syntax = match value {
        serde_json::Value::Null => JsonSyntax::Null { text: "null".to_string() },
        serde_json::Value::Bool(val) => JsonSyntax::Boolean {
            value: *val,
            text: if *val { "true" } else { "false" }.to_string(),
        },
        serde_json::Value::Number(num) => JsonSyntax::Number { text: num.to_string() },
        serde_json::Value::String(val) => JsonSyntax::String { text: quote(val) },
        serde_json::Value::Array(arr) => {
            let mut elements = Vec::with_capacity(arr.len());
            for child in arr {
                elements.push(convert(child, recursion_limit - 1)?);
            }
            JsonSyntax::Array { elements }
        }
        serde_json::Value::Object(map) => {
            let mut members = Vec::with_capacity(map.len());
            for (key, child) in map.iter() {
                members.push(JsonMember {
                    name: quote(key),
                    value: convert(child, recursion_limit - 1)?,
                });
            }
            JsonSyntax::Object { members }
        }
    };

    Ok(syntax)
}

fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}
