mod describe;
mod generate;
mod module_name;

pub use describe::describe;
pub use generate::generate;
pub use module_name::module_name;

use anyhow::Result;

use crate::argsets::ConfigOverrides;
use crate::bindings::BindingGenerator;
use crate::config::GeneratorConfig;

fn generator(overrides: ConfigOverrides) -> Result<BindingGenerator> {
    let mut config = GeneratorConfig::from_env()?;
    overrides.apply(&mut config);
    log::debug!("Generator config: {:?}", config);
    Ok(BindingGenerator::new(&config))
}
