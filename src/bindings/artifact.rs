use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::schema::{self, NodeError, SchemaNode};

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("could not read artifact: {0}")]
    Read(#[from] io::Error),
    #[error("could not parse artifact JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("malformed schema tree: {0}")]
    Tree(#[from] NodeError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleInfo {
    pub prefix: String,
    pub namespace: String,
}

#[derive(Debug, Deserialize)]
struct RawArtifact {
    modules: BTreeMap<String, (String, String)>,
    tree: Map<String, Value>,
}

/// The loaded binding artifact, bound to the module it describes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaModule {
    name: String,
    info: ModuleInfo,
    children: BTreeMap<String, SchemaNode>,
}

/// Artifact contents as read from disk, before the root module is picked.
#[derive(Debug)]
pub struct LoadedArtifact {
    raw: RawArtifact,
}

impl LoadedArtifact {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ArtifactError> {
        let raw = serde_json::from_str(contents)?;
        Ok(LoadedArtifact { raw })
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.raw.modules.keys().map(String::as_str)
    }

    /// Builds the handle for module `name`. The schema tree is only parsed
    /// here, so a malformed tree is reported even if the module matched.
    pub fn into_module(self, name: &str) -> Option<Result<SchemaModule, ArtifactError>> {
        let (prefix, namespace) = self.raw.modules.get(name)?.clone();
        let module = schema::children_from_json(&self.raw.tree)
            .map(|children| SchemaModule {
                name: name.to_string(),
                info: ModuleInfo { prefix, namespace },
                children,
            })
            .map_err(Into::into);
        Some(module)
    }
}

impl SchemaModule {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn info(&self) -> &ModuleInfo {
        &self.info
    }

    pub fn children(&self) -> &BTreeMap<String, SchemaNode> {
        &self.children
    }

    pub fn describe(&self) -> Value {
        schema::describe(&self.children)
    }
}
