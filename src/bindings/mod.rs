mod artifact;
mod generator;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::compiler::CompilerError;

pub use artifact::{ArtifactError, LoadedArtifact, ModuleInfo, SchemaModule};
pub use generator::BindingGenerator;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error(transparent)]
    Compiler(#[from] CompilerError),
    #[error("could not generate valid bindings for yang module: {}", .schema.display())]
    Bindings { schema: PathBuf },
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
