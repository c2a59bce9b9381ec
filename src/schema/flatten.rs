use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use super::node::{local_name, SchemaNode};

const KEY_YANG_NAME: &str = "yang_name";
const KEY_YANG_TYPE: &str = "yang_type";
const KEY_DATA_TYPE: &str = "data_type";

/// Flattens the children of a node into a mapping keyed by their exposed
/// names.
///
/// A container maps to its own children plus `yang_name` and `yang_type`,
/// all at the same level. The descriptive keys are written last, so they win
/// over a child that happens to share their name. A leaf maps to `yang_name`,
/// `yang_type` and, when known, `data_type`. Unsupported nodes are left out.
pub fn flatten(children: &BTreeMap<String, SchemaNode>) -> Map<String, Value> {
    let mut mapping = Map::new();
    for (key, node) in children {
        let name = local_name(key);
        match node {
            SchemaNode::Container { children } => {
                let mut container = flatten(children);
                container.insert(KEY_YANG_NAME.into(), json!(name));
                container.insert(KEY_YANG_TYPE.into(), json!(node.keyword()));
                mapping.insert(name.to_string(), Value::Object(container));
            }
            SchemaNode::Leaf { data_type } => {
                let mut leaf = Map::new();
                leaf.insert(KEY_YANG_NAME.into(), json!(name));
                leaf.insert(KEY_YANG_TYPE.into(), json!(node.keyword()));
                if let Some(data_type) = data_type {
                    leaf.insert(KEY_DATA_TYPE.into(), json!(data_type));
                }
                mapping.insert(name.to_string(), Value::Object(leaf));
            }
            SchemaNode::Unsupported { keyword } => {
                log::debug!("Skipping {} '{}'", keyword, name);
            }
        }
    }
    mapping
}

pub fn describe(children: &BTreeMap<String, SchemaNode>) -> Value {
    Value::Object(flatten(children))
}
