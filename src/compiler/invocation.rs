use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Output format whose result is loaded as the binding artifact.
pub const BINDING_FORMAT: &str = "jtox";

const FLAG_PLUGIN_DIR: &str = "--plugindir";
const FLAG_FORMAT: &str = "-f";
const FLAG_OUTPUT: &str = "-o";
const FLAG_SEARCH_PATH: &str = "-p";

/// Argument list for one compiler run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<OsString>,
}

impl Invocation {
    pub fn bindings(schema: &Path, artifact: &Path, plugin_dir: Option<&Path>) -> Self {
        let mut args = Vec::new();
        if let Some(plugin_dir) = plugin_dir {
            args.push(FLAG_PLUGIN_DIR.into());
            args.push(plugin_dir.into());
        }
        args.push(FLAG_FORMAT.into());
        args.push(BINDING_FORMAT.into());
        args.push(FLAG_OUTPUT.into());
        args.push(artifact.into());
        args.push(FLAG_SEARCH_PATH.into());
        args.push(search_path(schema).into());
        args.push(schema.into());
        Invocation { args }
    }

    /// A run that only prints a report (tree, name) on stdout.
    pub fn report(schema: &Path, format: &str) -> Self {
        Invocation {
            args: vec![
                FLAG_FORMAT.into(),
                format.into(),
                FLAG_SEARCH_PATH.into(),
                search_path(schema).into(),
                schema.into(),
            ],
        }
    }

    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Invocation {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    pub fn display(&self, program: &OsStr) -> String {
        std::iter::once(program)
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Imports are searched for next to the schema itself.
fn search_path(schema: &Path) -> &Path {
    match schema.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}
