use std::path::PathBuf;

use anyhow::{anyhow, Result};
use env_logger::Env;
use pico_args::Arguments;

use yang_describe::argsets::{ConfigOverrides, SchemaArgs};
use yang_describe::constants::{defaults, envvars};
use yang_describe::{command, helpers};

const CMD_DESCRIBE: &str = "describe";
const CMD_GENERATE: &str = "generate";
const CMD_MODULE_NAME: &str = "module-name";

fn main() -> Result<()> {
    let dotenv_loaded = helpers::load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    if dotenv_loaded {
        log::debug!("Loaded local .env");
    }

    let mut args = Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_DESCRIBE) => command::describe(schema_args(args)?),
        Some(CMD_GENERATE) => command::generate(schema_args(args)?),
        Some(CMD_MODULE_NAME) => command::module_name(schema_args(args)?),
        _ => Err(anyhow!(
            "Subcommand must be one of 'describe', 'generate', 'module-name'"
        )),
    }
}

fn schema_args(mut args: Arguments) -> Result<SchemaArgs> {
    let overrides = ConfigOverrides {
        compiler: args.opt_value_from_str("--compiler")?,
        plugin_dir: args.opt_value_from_str("--plugindir")?,
        artifact: args.opt_value_from_str("--artifact")?,
        name_source: args.opt_value_from_str("--name-source")?,
    };
    let schema: PathBuf = args.free_from_str()?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(anyhow!("Unexpected arguments: {:?}", remaining));
    }

    Ok(SchemaArgs { schema, overrides })
}
