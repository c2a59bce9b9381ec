//! Schema tree model and the flattener that turns it into a nested mapping.

mod flatten;
mod node;

pub use flatten::{describe, flatten};
pub use node::{children_from_json, local_name, NodeError, SchemaNode};
