//! Subprocess boundary to the YANG schema compiler (`pyang` by default).
//!
//! Every invocation runs to completion with its output streams captured; a
//! non-zero exit is reported as [`CompilerError::CommandExecution`] carrying
//! the compiler's standard error.

mod invocation;
mod module_name;

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

pub use invocation::{Invocation, BINDING_FORMAT};
pub use module_name::{module_name_from_name_output, module_name_from_tree_output, NameSource};

#[derive(Error, Debug)]
pub enum CompilerError {
    #[error("command `{command}` exited with {status}: {stderr}")]
    CommandExecution {
        command: String,
        status: String,
        stderr: String,
    },
    #[error("could not run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Clone, Debug)]
pub struct Compiler {
    program: OsString,
    plugin_dir: Option<PathBuf>,
}

impl Compiler {
    pub fn new(program: impl Into<OsString>, plugin_dir: Option<PathBuf>) -> Self {
        Compiler {
            program: program.into(),
            plugin_dir,
        }
    }

    /// Writes the binding artifact for `schema` to `artifact`, overwriting
    /// whatever was there.
    pub fn generate_bindings(&self, schema: &Path, artifact: &Path) -> Result<(), CompilerError> {
        let invocation = Invocation::bindings(schema, artifact, self.plugin_dir.as_deref());
        self.run(&invocation).map(|_| ())
    }

    pub fn resolve_module_name(
        &self,
        schema: &Path,
        source: NameSource,
    ) -> Result<Option<String>, CompilerError> {
        let invocation = Invocation::report(schema, source.format());
        let output = self.run(&invocation)?;
        let name = match source {
            NameSource::Name => module_name_from_name_output(&output),
            NameSource::Tree => module_name_from_tree_output(&output),
        };
        match &name {
            Some(name) => log::debug!("Module name of {}: {}", schema.display(), name),
            None => log::warn!(
                "Could not find a module name in `{}` output for {}",
                source.format(),
                schema.display()
            ),
        }
        Ok(name)
    }

    fn run(&self, invocation: &Invocation) -> Result<String, CompilerError> {
        let command = invocation.display(&self.program);
        log::debug!("Running {}", command);

        let output = Command::new(&self.program)
            .args(invocation.args())
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CompilerError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
            log::error!("{} failed: {}", command, stderr);
            return Err(CompilerError::CommandExecution {
                command,
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
