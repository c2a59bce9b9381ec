use anyhow::Result;

use crate::argsets::SchemaArgs;

pub fn generate(args: SchemaArgs) -> Result<()> {
    let generator = super::generator(args.overrides)?;
    let artifact = generator.generate(&args.schema)?;
    println!("{}", artifact.display());
    Ok(())
}
