use std::path::PathBuf;

use crate::compiler::NameSource;
use crate::config::GeneratorConfig;

/// Command-line values that take precedence over the environment.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub compiler: Option<String>,
    pub plugin_dir: Option<PathBuf>,
    pub artifact: Option<PathBuf>,
    pub name_source: Option<NameSource>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut GeneratorConfig) {
        if let Some(compiler) = self.compiler {
            config.compiler = compiler;
        }
        if let Some(plugin_dir) = self.plugin_dir {
            config.plugin_dir = Some(plugin_dir);
        }
        if let Some(artifact) = self.artifact {
            config.artifact_path = artifact;
        }
        if let Some(name_source) = self.name_source {
            config.name_source = name_source;
        }
    }
}

#[derive(Debug)]
pub struct SchemaArgs {
    pub schema: PathBuf,
    pub overrides: ConfigOverrides,
}
