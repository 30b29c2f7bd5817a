//! Implementation of the `expresso new` command.
//!
//! Responsibility: translate CLI arguments into a `Blueprint`, call the
//! core generate service, and display results. No business logic lives
//! here.

use std::io::IsTerminal;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info, instrument};

use expresso_adapters::{EmbeddedCatalog, LocalFilesystem, RawRenderer};
use expresso_core::{
    application::{GenerateService, ports::OverwriteConfirmation},
    domain::{Blueprint, Cache, CssEngine, Database, LanguageVariant, ViewEngine},
    error::ExpressoResult,
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    postgen,
};

/// Execute the `expresso new` command.
///
/// Dispatch sequence:
/// 1. Resolve selections (CLI flags → config defaults → built-ins)
/// 2. Build the `Blueprint` (the builder rejects bad combinations)
/// 3. Early-exit if `--dry-run`
/// 4. Generate via `GenerateService` (the guard may prompt)
/// 5. Run post-generation tools (failures are warnings)
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(app = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let blueprint = build_blueprint(&args, &config)?;

    debug!(
        variant = %blueprint.variant(),
        database = %blueprint.database(),
        view = %blueprint.view(),
        css = %blueprint.css(),
        cache = %blueprint.cache(),
        destination = %blueprint.destination().display(),
        "Blueprint resolved"
    );

    let service = GenerateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(RawRenderer::new()),
        Box::new(EmbeddedCatalog::new()),
        Box::new(PromptConfirmation {
            assume_yes: args.force || args.yes,
        }),
    );

    if args.dry_run {
        let report = service.plan(&blueprint).map_err(CliError::Core)?;
        output.header(&format!(
            "Dry run: would create '{}' at {}",
            blueprint.app_name(),
            blueprint.destination().display()
        ))?;
        for path in &report.created {
            output.create_line(path)?;
        }
        return Ok(());
    }

    output.header(&format!("Creating '{}'...", blueprint.app_name()))?;
    info!(destination = %blueprint.destination().display(), "generation started");

    let report = service.generate(&blueprint).map_err(CliError::Core)?;

    for path in &report.created {
        output.create_line(path)?;
    }
    output.success(&format!("Application '{}' created!", blueprint.app_name()))?;

    // Post-generation conveniences. A failing tool must never fail the
    // run: the skeleton on disk is already complete and correct.
    if !args.skip_install {
        postgen::npm_install(blueprint.destination(), &output)?;
    }
    if !args.no_git {
        postgen::git_init(blueprint.destination(), &output)?;
    }

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", blueprint.destination().display()))?;
        if args.skip_install {
            output.print("  npm install")?;
        }
        output.print("  npm run dev")?;
    }

    Ok(())
}

// ── Blueprint construction ────────────────────────────────────────────────────

/// Resolve one selection: CLI flag, then config default, then built-in.
fn resolve<T, A>(cli: Option<A>, configured: &Option<String>, fallback: T) -> CliResult<T>
where
    T: FromStr<Err = expresso_core::domain::DomainError>,
    A: Into<T>,
{
    if let Some(arg) = cli {
        return Ok(arg.into());
    }
    match configured {
        Some(value) => value.parse().map_err(|e| CliError::ConfigError {
            message: format!("invalid default '{value}': {e}"),
            source: None,
        }),
        None => Ok(fallback),
    }
}

fn build_blueprint(args: &NewArgs, config: &AppConfig) -> CliResult<Blueprint> {
    let variant: LanguageVariant =
        resolve(args.lang, &config.defaults.lang, LanguageVariant::Js)?;
    let database: Database = resolve(args.database, &config.defaults.database, Database::None)?;
    let view: ViewEngine = resolve(args.view, &config.defaults.view, ViewEngine::None)?;
    let css: CssEngine = resolve(args.css, &config.defaults.css, CssEngine::Plain)?;
    let cache: Cache = resolve(args.cache, &config.defaults.cache, Cache::None)?;

    let mut builder = Blueprint::builder(&args.name)
        .variant(variant)
        .database(database)
        .map_err(|e| CliError::Core(e.into()))?
        .view(view)
        .map_err(|e| CliError::Core(e.into()))?
        .css(css)
        .cache(cache)
        .gitignore(!args.no_gitignore);

    if let Some(dir) = &args.dir {
        builder = builder.destination(dir);
    }

    builder.build().map_err(|e| CliError::Core(e.into()))
}

// ── Overwrite confirmation ────────────────────────────────────────────────────

/// Interactive implementation of the guard's confirmation port.
struct PromptConfirmation {
    /// `--force` / `--yes`: erase without asking.
    assume_yes: bool,
}

impl OverwriteConfirmation for PromptConfirmation {
    fn confirm_erase(&self, path: &Path) -> ExpressoResult<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        // Piped stdin cannot answer a prompt; declining is the only safe
        // default for a destructive question.
        if !std::io::stdin().is_terminal() {
            return Ok(false);
        }
        Ok(prompt_erase(path))
    }
}

fn prompt_erase(path: &Path) -> bool {
    use std::io::Write;

    print!(
        "Destination {} is not empty. Erase its contents and continue? [y/N] ",
        path.display()
    );
    if std::io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return false;
    }

    let input = input.trim().to_ascii_lowercase();
    input == "y" || input == "yes"
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{DatabaseArg, LangArg, ViewArg};
    use std::path::PathBuf;

    fn new_args(name: &str) -> NewArgs {
        NewArgs {
            name: name.into(),
            lang: None,
            database: None,
            view: None,
            css: None,
            cache: None,
            no_gitignore: false,
            dir: None,
            yes: false,
            force: false,
            dry_run: false,
            skip_install: false,
            no_git: false,
        }
    }

    #[test]
    fn defaults_build_a_js_blueprint() {
        let bp = build_blueprint(&new_args("my-app"), &AppConfig::default()).unwrap();
        assert_eq!(bp.variant(), LanguageVariant::Js);
        assert_eq!(bp.database(), Database::None);
        assert!(bp.include_gitignore());
        assert_eq!(bp.destination(), Path::new("./my-app"));
    }

    #[test]
    fn cli_flags_override_config_defaults() {
        let mut config = AppConfig::default();
        config.defaults.lang = Some("js".into());
        config.defaults.database = Some("mongoose".into());

        let mut args = new_args("x");
        args.lang = Some(LangArg::Ts);
        args.database = Some(DatabaseArg::Sequelize);

        let bp = build_blueprint(&args, &config).unwrap();
        assert_eq!(bp.variant(), LanguageVariant::Ts);
        assert_eq!(bp.database(), Database::Sequelize);
    }

    #[test]
    fn config_defaults_apply_when_flags_absent() {
        let mut config = AppConfig::default();
        config.defaults.database = Some("mongo".into());
        let bp = build_blueprint(&new_args("x"), &config).unwrap();
        assert_eq!(bp.database(), Database::Mongoose);
    }

    #[test]
    fn bad_config_default_is_a_config_error() {
        let mut config = AppConfig::default();
        config.defaults.database = Some("dynamodb".into());
        let err = build_blueprint(&new_args("x"), &config).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn ts_with_view_is_rejected_as_user_error() {
        let mut args = new_args("x");
        args.lang = Some(LangArg::Ts);
        args.view = Some(ViewArg::Pug);
        let err = build_blueprint(&args, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn dir_overrides_destination() {
        let mut args = new_args("x");
        args.dir = Some(PathBuf::from("build/here"));
        let bp = build_blueprint(&args, &AppConfig::default()).unwrap();
        assert_eq!(bp.destination(), Path::new("build/here"));
    }
}
