use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

const KEYWORD_CONTAINER: &str = "container";
const KEYWORD_LEAF: &str = "leaf";
const TYPE_ENUMERATION: &str = "enumeration";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NodeError {
    #[error("node '{0}' is not an array")]
    NotAnArray(String),
    #[error("node '{0}' has no keyword")]
    MissingKeyword(String),
    #[error("container '{0}' has no child object")]
    MissingChildren(String),
    #[error("leaf '{0}' has an unreadable type")]
    InvalidType(String),
}

/// A node of the schema tree, classified by what the flattener does with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaNode {
    Container {
        children: BTreeMap<String, SchemaNode>,
    },
    Leaf {
        data_type: Option<String>,
    },
    /// Lists, leaf-lists, enumerations and anything else without a mapping.
    Unsupported {
        keyword: String,
    },
}

impl SchemaNode {
    /// Builds a node from its `jtox` encoding, e.g. `["leaf", "string"]` or
    /// `["container", {...}]`.
    pub fn from_json(key: &str, data: &Value) -> Result<SchemaNode, NodeError> {
        let items = data
            .as_array()
            .ok_or_else(|| NodeError::NotAnArray(key.to_string()))?;
        let keyword = items
            .first()
            .and_then(Value::as_str)
            .ok_or_else(|| NodeError::MissingKeyword(key.to_string()))?;

        match keyword {
            KEYWORD_CONTAINER => {
                let children = items
                    .get(1)
                    .and_then(Value::as_object)
                    .ok_or_else(|| NodeError::MissingChildren(key.to_string()))?;
                Ok(SchemaNode::Container {
                    children: children_from_json(children)?,
                })
            }
            KEYWORD_LEAF => {
                let data_type = match items.get(1) {
                    None | Some(Value::Null) => None,
                    Some(t) => Some(
                        base_type_name(t).ok_or_else(|| NodeError::InvalidType(key.to_string()))?,
                    ),
                };
                if data_type.as_deref() == Some(TYPE_ENUMERATION) {
                    return Ok(SchemaNode::Unsupported {
                        keyword: TYPE_ENUMERATION.to_string(),
                    });
                }
                Ok(SchemaNode::Leaf { data_type })
            }
            other => Ok(SchemaNode::Unsupported {
                keyword: other.to_string(),
            }),
        }
    }

    pub fn keyword(&self) -> &str {
        match self {
            SchemaNode::Container { .. } => KEYWORD_CONTAINER,
            SchemaNode::Leaf { .. } => KEYWORD_LEAF,
            SchemaNode::Unsupported { keyword } => keyword,
        }
    }
}

pub fn children_from_json(
    object: &serde_json::Map<String, Value>,
) -> Result<BTreeMap<String, SchemaNode>, NodeError> {
    object
        .iter()
        .map(|(key, data)| Ok((key.clone(), SchemaNode::from_json(key, data)?)))
        .collect()
}

/// `"string"`, or `["decimal64", 2]` / `["union", [...]]` for types that
/// carry extra detail.
fn base_type_name(value: &Value) -> Option<String> {
    match value {
        Value::String(name) => Some(name.clone()),
        Value::Array(parts) => parts.first().and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// Identifier a node is exposed under: its name without the `module:` prefix.
pub fn local_name(key: &str) -> &str {
    match key.split_once(':') {
        Some((_, name)) if !name.is_empty() => name,
        _ => key,
    }
}
