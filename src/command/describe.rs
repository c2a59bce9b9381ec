use anyhow::Result;

use crate::argsets::SchemaArgs;

pub fn describe(args: SchemaArgs) -> Result<()> {
    let generator = super::generator(args.overrides)?;
    let module = generator.load(&args.schema)?;
    log::info!(
        "Describing module {} ({} top-level nodes)",
        module.name(),
        module.children().len()
    );
    println!("{}", serde_json::to_string_pretty(&module.describe())?);
    Ok(())
}
