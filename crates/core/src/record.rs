// Records: ordered field-name -> scalar value mappings

use serde::{Deserialize, Serialize};

/// Scalar cell value as produced by a data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Value {
    /// Convert a scalar JSON value. Objects, arrays and null are not
    /// scalars and are rejected at the boundary.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, String> {
        match value {
            serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
            serde_json::Value::Number(n) => {
                let n = n
                    .as_f64()
                    .ok_or_else(|| format!("number out of range: {n}"))?;
                Ok(Value::Number(n))
            }
            serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
            other => Err(format!("expected scalar, got {}", json_kind(other))),
        }
    }

    /// Parse a textual field back into a scalar (used by CSV import).
    /// Numbers and booleans round-trip; everything else stays text.
    pub fn from_input(input: &str) -> Self {
        if let Ok(n) = input.parse::<f64>() {
            return Value::Number(n);
        }
        match input {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::Text(input.to_string()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => {
                // Integral numbers render without a decimal point
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// One uniform entry in a dataset. Field order is the order of
/// construction and is preserved through every transformation; the
/// matrix transformer derives its header from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new(fields: Vec<(String, Value)>) -> Self {
        Record { fields }
    }

    /// Build from a JSON object, keeping the object's field order.
    /// Requires serde_json's `preserve_order` feature, otherwise the
    /// order seen here is alphabetical rather than the wire order.
    pub fn from_json_object(map: &serde_json::Map<String, serde_json::Value>) -> Result<Self, String> {
        let mut fields = Vec::with_capacity(map.len());
        for (name, value) in map {
            let value = Value::from_json(value)
                .map_err(|e| format!("field '{name}': {e}"))?;
            fields.push((name.clone(), value));
        }
        Ok(Record { fields })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in construction order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}
