//! Parameter schemas and validation.
//!
//! Every tool declares an ordered list of [`ParamSpec`]s. Validation turns the caller's raw
//! argument object into a new object that contains only declared fields, with defaults applied
//! and nested objects/arrays checked recursively.

use serde_json::{Map, Value, json};
use thiserror::Error;

/// JSON type of a declared parameter.
#[derive(Debug, Clone, Copy)]
pub enum ParamKind {
    String,
    Integer,
    Number,
    Boolean,
    /// Accepts either a string or an integer (backend record ids).
    Identifier,
    Object(&'static [ParamSpec]),
    Array(&'static ParamKind),
}

impl ParamKind {
    fn expected(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Identifier => "string or integer",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
        }
    }
}

/// Default applied when an optional parameter is omitted.
#[derive(Debug, Clone, Copy)]
pub enum DefaultValue {
    Int(i64),
    Str(&'static str),
    Bool(bool),
}

impl DefaultValue {
    #[must_use]
    pub fn to_value(self) -> Value {
        match self {
            Self::Int(n) => json!(n),
            Self::Str(s) => json!(s),
            Self::Bool(b) => json!(b),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub default: Option<DefaultValue>,
    pub description: &'static str,
}

impl ParamSpec {
    #[must_use]
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
            description,
        }
    }

    #[must_use]
    pub const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
            description,
        }
    }

    #[must_use]
    pub const fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required parameter: {0}")]
    Missing(String),
    #[error("invalid parameter '{field}': expected {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },
}

impl ValidationError {
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Missing(field) | Self::WrongType { field, .. } => field,
        }
    }
}

/// Validate `args` against `params`.
///
/// Unknown fields are dropped, `null` counts as absent, and defaults fill omitted fields.
///
/// # Errors
///
/// Returns the first missing required field or type mismatch, in declaration order.
pub fn validate(
    params: &[ParamSpec],
    args: &Map<String, Value>,
) -> Result<Map<String, Value>, ValidationError> {
    validate_object(params, args, "")
}

fn validate_object(
    params: &[ParamSpec],
    args: &Map<String, Value>,
    prefix: &str,
) -> Result<Map<String, Value>, ValidationError> {
    let mut out = Map::new();
    for spec in params {
        let path = if prefix.is_empty() {
            spec.name.to_string()
        } else {
            format!("{prefix}.{}", spec.name)
        };

        let value = match args.get(spec.name) {
            None | Some(Value::Null) => spec.default.map(DefaultValue::to_value),
            Some(v) => Some(validate_value(&spec.kind, v, &path)?),
        };

        match value {
            Some(v) => {
                out.insert(spec.name.to_string(), v);
            }
            None if spec.required => return Err(ValidationError::Missing(path)),
            None => {}
        }
    }
    Ok(out)
}

fn validate_value(kind: &ParamKind, value: &Value, path: &str) -> Result<Value, ValidationError> {
    let wrong_type = || ValidationError::WrongType {
        field: path.to_string(),
        expected: kind.expected(),
    };

    match kind {
        ParamKind::String => value.is_string().then(|| value.clone()).ok_or_else(wrong_type),
        ParamKind::Integer => is_integer(value)
            .then(|| value.clone())
            .ok_or_else(wrong_type),
        ParamKind::Number => value.is_number().then(|| value.clone()).ok_or_else(wrong_type),
        ParamKind::Boolean => value.is_boolean().then(|| value.clone()).ok_or_else(wrong_type),
        ParamKind::Identifier => (value.is_string() || is_integer(value))
            .then(|| value.clone())
            .ok_or_else(wrong_type),
        ParamKind::Object(fields) => {
            let obj = value.as_object().ok_or_else(wrong_type)?;
            validate_object(fields, obj, path).map(Value::Object)
        }
        ParamKind::Array(item_kind) => {
            let items = value.as_array().ok_or_else(wrong_type)?;
            items
                .iter()
                .enumerate()
                .map(|(i, item)| validate_value(item_kind, item, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
    }
}

fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}

/// Render a parameter list as a JSON Schema object.
#[must_use]
pub fn input_schema(params: &[ParamSpec]) -> Value {
    let mut properties = Map::new();
    let mut required: Vec<Value> = Vec::new();

    for spec in params {
        let mut prop = kind_schema(&spec.kind);
        if !spec.description.is_empty() {
            prop["description"] = json!(spec.description);
        }
        if let Some(default) = spec.default {
            prop["default"] = default.to_value();
        }
        properties.insert(spec.name.to_string(), prop);

        if spec.required && spec.default.is_none() {
            required.push(json!(spec.name));
        }
    }

    let mut schema = json!({
        "type": "object",
        "properties": properties,
    });
    if !required.is_empty() {
        schema["required"] = Value::Array(required);
    }
    schema
}

fn kind_schema(kind: &ParamKind) -> Value {
    match kind {
        ParamKind::String => json!({"type": "string"}),
        ParamKind::Integer => json!({"type": "integer"}),
        ParamKind::Number => json!({"type": "number"}),
        ParamKind::Boolean => json!({"type": "boolean"}),
        ParamKind::Identifier => json!({"type": ["string", "integer"]}),
        ParamKind::Object(fields) => input_schema(fields),
        ParamKind::Array(item) => json!({"type": "array", "items": kind_schema(item)}),
    }
}
