use anyhow::{anyhow, Result};

use crate::argsets::SchemaArgs;

pub fn module_name(args: SchemaArgs) -> Result<()> {
    let generator = super::generator(args.overrides)?;
    let name = generator
        .module_name(&args.schema)?
        .ok_or_else(|| anyhow!("No module name found for {}", args.schema.display()))?;
    println!("{name}");
    Ok(())
}
