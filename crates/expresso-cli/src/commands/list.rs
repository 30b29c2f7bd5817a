//! Implementation of the `expresso list` command.

use expresso_core::domain::LanguageVariant;

use crate::{
    cli::{ListArgs, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let variants: &[LanguageVariant] = match args.lang.map(Into::into) {
        Some(LanguageVariant::Js) => &[LanguageVariant::Js],
        Some(LanguageVariant::Ts) => &[LanguageVariant::Ts],
        None => &[LanguageVariant::Js, LanguageVariant::Ts],
    };

    output.header("Supported options per language variant:")?;

    for variant in variants {
        output.print("")?;
        match variant {
            LanguageVariant::Js => {
                output.print("js (JavaScript, Babel toolchain)")?;
                output.print("  --database  none, mongojs, mongoose (alias: mongo), sequelize (alias: mysql)")?;
                output.print("  --view      none, dust, ejs, hbs, hjs, pug, twig, vash")?;
                output.print("  --css       css, less, sass, stylus, compass (with a view engine)")?;
                output.print("  --cache     none, redis")?;
            }
            LanguageVariant::Ts => {
                output.print("ts (TypeScript, tsc toolchain)")?;
                output.print("  --database  none, mongoose (alias: mongo), sequelize (alias: mysql)")?;
                output.print("  --view      (not supported; ts skeletons are API-only)")?;
                output.print("  --css       css")?;
                output.print("  --cache     none, redis")?;
            }
        }
    }

    Ok(())
}
