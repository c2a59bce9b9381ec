use std::fs;
use std::path::{Path, PathBuf};

use super::artifact::{ArtifactError, LoadedArtifact, SchemaModule};
use super::GeneratorError;
use crate::compiler::{Compiler, NameSource};
use crate::config::GeneratorConfig;
use crate::helpers::{acquire, Acquisition, Clock, RetryPolicy, SystemClock};

/// Runs the compiler to produce the binding artifact and waits for it to
/// become loadable.
pub struct BindingGenerator<C = SystemClock> {
    compiler: Compiler,
    artifact_path: PathBuf,
    name_source: NameSource,
    retry: RetryPolicy,
    clock: C,
}

impl BindingGenerator<SystemClock> {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> BindingGenerator<C> {
    pub fn with_clock(config: &GeneratorConfig, clock: C) -> Self {
        BindingGenerator {
            compiler: Compiler::new(&config.compiler, config.plugin_dir.clone()),
            artifact_path: config.artifact_path.clone(),
            name_source: config.name_source,
            retry: config.retry,
            clock,
        }
    }

    /// Compiles `schema` into the artifact path. Any previous artifact is
    /// overwritten, and nothing is cleaned up if the compiler fails.
    pub fn generate(&self, schema: &Path) -> Result<&Path, GeneratorError> {
        if let Some(dir) = self.artifact_path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        self.compiler.generate_bindings(schema, &self.artifact_path)?;
        log::info!(
            "Generated bindings for {} at {}",
            schema.display(),
            self.artifact_path.display()
        );
        Ok(&self.artifact_path)
    }

    pub fn module_name(&self, schema: &Path) -> Result<Option<String>, GeneratorError> {
        self.compiler
            .resolve_module_name(schema, self.name_source)
            .map_err(Into::into)
    }

    /// Polls the artifact until it parses and declares `module_name`.
    ///
    /// A missing name can never match, so it runs the whole retry budget.
    pub fn acquire(
        &self,
        module_name: Option<&str>,
    ) -> Acquisition<Result<SchemaModule, ArtifactError>> {
        let mut backoff = self.retry.backoff();
        acquire(&mut backoff, &self.clock, |attempt| {
            let artifact = match LoadedArtifact::load(&self.artifact_path) {
                Ok(artifact) => artifact,
                Err(e) => {
                    log::debug!(
                        "Attempt {}: artifact {} not loadable yet: {}",
                        attempt,
                        self.artifact_path.display(),
                        e
                    );
                    return None;
                }
            };
            let declared: Vec<String> = artifact.module_names().map(str::to_string).collect();
            let found = module_name.and_then(|name| artifact.into_module(name));
            if found.is_none() {
                log::debug!(
                    "Attempt {}: no module {:?} among {:?}",
                    attempt,
                    module_name,
                    declared
                );
            }
            found
        })
    }

    /// Generates the artifact for `schema` and returns the handle for its
    /// root module.
    pub fn load(&self, schema: &Path) -> Result<SchemaModule, GeneratorError> {
        self.generate(schema)?;
        let module_name = self.module_name(schema)?;

        match self.acquire(module_name.as_deref()) {
            Acquisition::Ready(module) => Ok(module?),
            Acquisition::TimedOut { attempts } => {
                log::error!(
                    "No module named {:?} in {} after {} attempts",
                    module_name,
                    self.artifact_path.display(),
                    attempts
                );
                Err(GeneratorError::Bindings {
                    schema: schema.to_path_buf(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::helpers::test_clock::FakeClock;

    const ARTIFACT: &str = r#"{
        "modules": {"gluon-port": ["gp", "urn:gluon:port"]},
        "tree": {"gluon-port:port": ["container", {"id": ["leaf", "string"]}]}
    }"#;

    fn generator(artifact_path: PathBuf) -> BindingGenerator<FakeClock> {
        let config = GeneratorConfig {
            artifact_path,
            ..GeneratorConfig::default()
        };
        BindingGenerator::with_clock(&config, FakeClock::default())
    }

    #[test]
    fn acquire_ready_when_module_matches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binding.json");
        fs::write(&path, ARTIFACT).unwrap();

        let generator = generator(path);
        match generator.acquire(Some("gluon-port")) {
            Acquisition::Ready(module) => assert_eq!(module.unwrap().name(), "gluon-port"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(generator.clock.sleeps.borrow().len(), 1);
    }

    #[test]
    fn acquire_times_out_on_name_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binding.json");
        fs::write(&path, ARTIFACT).unwrap();

        let generator = generator(path);
        let result = generator.acquire(Some("gluon"));
        assert!(matches!(result, Acquisition::TimedOut { attempts: 10 }));
        assert_eq!(generator.clock.total(), Duration::from_secs(10));
    }

    #[test]
    fn acquire_times_out_without_name_or_artifact() {
        let dir = tempfile::tempdir().unwrap();

        let generator = generator(dir.path().join("missing.json"));
        assert!(matches!(
            generator.acquire(Some("gluon-port")),
            Acquisition::TimedOut { attempts: 10 }
        ));

        fs::write(dir.path().join("missing.json"), ARTIFACT).unwrap();
        assert!(matches!(
            generator.acquire(None),
            Acquisition::TimedOut { attempts: 10 }
        ));
    }
}
