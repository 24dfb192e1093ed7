//! Caller-facing parameters → backend field names.

use serde_json::{Map, Value};

/// One entry of a tool's field-mapping table.
#[derive(Debug, Clone, Copy)]
pub enum FieldMap {
    /// Copy a value to a differently named backend field.
    Rename {
        from: &'static str,
        to: &'static str,
    },
    /// Flatten an object to `prefix + key` for each listed key.
    Flatten {
        from: &'static str,
        prefix: &'static str,
        fields: &'static [&'static str],
    },
    /// Rename the keys of every object in an array.
    Each {
        from: &'static str,
        to: &'static str,
        fields: &'static [(&'static str, &'static str)],
    },
}

impl FieldMap {
    #[must_use]
    pub const fn rename(from: &'static str, to: &'static str) -> Self {
        Self::Rename { from, to }
    }

    #[must_use]
    pub const fn flatten(
        from: &'static str,
        prefix: &'static str,
        fields: &'static [&'static str],
    ) -> Self {
        Self::Flatten {
            from,
            prefix,
            fields,
        }
    }

    #[must_use]
    pub const fn each(
        from: &'static str,
        to: &'static str,
        fields: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self::Each { from, to, fields }
    }

    /// Caller-facing parameter this entry reads.
    #[must_use]
    pub fn source(&self) -> &'static str {
        match self {
            Self::Rename { from, .. } | Self::Flatten { from, .. } | Self::Each { from, .. } => {
                *from
            }
        }
    }
}

/// Apply `mapping` to already-validated parameters.
///
/// Entries are applied in table order; absent parameters produce no output fields.
#[must_use]
pub fn translate(mapping: &[FieldMap], params: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();
    for entry in mapping {
        let Some(value) = params.get(entry.source()) else {
            continue;
        };

        match entry {
            FieldMap::Rename { to, .. } => {
                out.insert((*to).to_string(), value.clone());
            }
            FieldMap::Flatten { prefix, fields, .. } => {
                let Some(obj) = value.as_object() else {
                    continue;
                };
                for key in *fields {
                    if let Some(v) = obj.get(*key) {
                        out.insert(format!("{prefix}{key}"), v.clone());
                    }
                }
            }
            FieldMap::Each { to, fields, .. } => {
                let Some(items) = value.as_array() else {
                    continue;
                };
                let renamed = items
                    .iter()
                    .map(|item| Value::Object(rename_keys(item, fields)))
                    .collect();
                out.insert((*to).to_string(), Value::Array(renamed));
            }
        }
    }
    out
}

fn rename_keys(item: &Value, fields: &[(&str, &str)]) -> Map<String, Value> {
    let mut out = Map::new();
    if let Some(obj) = item.as_object() {
        for (from, to) in fields {
            if let Some(v) = obj.get(*from) {
                out.insert((*to).to_string(), v.clone());
            }
        }
    }
    out
}
