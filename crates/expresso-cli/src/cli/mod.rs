//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here; conversion to
//! domain types happens in the command handlers.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use expresso_core::domain::{Cache, CssEngine, Database, LanguageVariant, ViewEngine};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "expresso",
    bin_name = "expresso",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Express application skeletons, instantly",
    long_about = "Expresso generates runnable Express-style application \
                  skeletons with your choice of language variant, database, \
                  view engine, stylesheet engine and cache.",
    after_help = "EXAMPLES:\n\
        \x20 expresso new my-api  --lang ts --database sequelize\n\
        \x20 expresso new my-blog --lang js --database mongoose --view pug --css less\n\
        \x20 expresso list\n\
        \x20 expresso completions bash > /usr/share/bash-completion/completions/expresso",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new application skeleton.
    #[command(
        visible_alias = "n",
        about = "Generate a new application skeleton",
        after_help = "EXAMPLES:\n\
            \x20 expresso new my-api\n\
            \x20 expresso new my-api  --lang ts --database sequelize --cache redis\n\
            \x20 expresso new my-blog --lang js --database mongoose --view hbs --css sass"
    )]
    New(NewArgs),

    /// Show the supported option matrix.
    #[command(
        visible_alias = "ls",
        about = "List supported options per language variant"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 expresso completions bash > ~/.local/share/bash-completion/completions/expresso\n\
            \x20 expresso completions zsh  > ~/.zfunc/_expresso\n\
            \x20 expresso completions fish > ~/.config/fish/completions/expresso.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `expresso new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Application name. Also the default destination directory (`./name`).
    #[arg(value_name = "NAME", help = "Application name")]
    pub name: String,

    /// Language variant of the generated sources.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "VARIANT",
        value_enum,
        help = "Language variant (js or ts)"
    )]
    pub lang: Option<LangArg>,

    /// Database integration.
    #[arg(
        short = 'd',
        long = "database",
        value_name = "DATABASE",
        value_enum,
        help = "Database integration"
    )]
    pub database: Option<DatabaseArg>,

    /// View engine (JavaScript variant only).
    #[arg(
        long = "view",
        value_name = "ENGINE",
        value_enum,
        help = "View engine (requires --lang js)"
    )]
    pub view: Option<ViewArg>,

    /// Stylesheet engine (only meaningful with a view engine).
    #[arg(
        long = "css",
        value_name = "ENGINE",
        value_enum,
        help = "Stylesheet engine"
    )]
    pub css: Option<CssArg>,

    /// Cache integration.
    #[arg(long = "cache", value_name = "CACHE", value_enum, help = "Cache integration")]
    pub cache: Option<CacheArg>,

    /// Do not write a .gitignore.
    #[arg(long = "no-gitignore", help = "Skip the .gitignore file")]
    pub no_gitignore: bool,

    /// Override the destination directory.
    #[arg(
        long = "dir",
        value_name = "DIR",
        help = "Destination directory (default: ./NAME)"
    )]
    pub dir: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Answer yes to all prompts")]
    pub yes: bool,

    /// Erase a non-empty destination without asking (destructive).
    #[arg(long = "force", help = "Erase a non-empty destination without asking")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Do not run `npm install` after generation.
    #[arg(long = "skip-install", help = "Skip npm install")]
    pub skip_install: bool,

    /// Do not run `git init` after generation.
    #[arg(long = "no-git", help = "Skip git init")]
    pub no_git: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `expresso list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Restrict the matrix to one variant.
    #[arg(short = 'l', long = "lang", value_enum, help = "Filter by language variant")]
    pub lang: Option<LangArg>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `expresso completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Language variants accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LangArg {
    /// Also accepted as `javascript`.
    #[value(alias = "javascript")]
    Js,
    /// Also accepted as `typescript`.
    #[value(alias = "typescript")]
    Ts,
}

impl From<LangArg> for LanguageVariant {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Js => Self::Js,
            LangArg::Ts => Self::Ts,
        }
    }
}

/// Database integrations accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DatabaseArg {
    None,
    Mongojs,
    #[value(alias = "mongo")]
    Mongoose,
    #[value(alias = "mysql")]
    Sequelize,
}

impl From<DatabaseArg> for Database {
    fn from(arg: DatabaseArg) -> Self {
        match arg {
            DatabaseArg::None => Self::None,
            DatabaseArg::Mongojs => Self::MongoJs,
            DatabaseArg::Mongoose => Self::Mongoose,
            DatabaseArg::Sequelize => Self::Sequelize,
        }
    }
}

/// View engines accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ViewArg {
    None,
    Dust,
    Ejs,
    #[value(alias = "handlebars")]
    Hbs,
    #[value(alias = "hogan")]
    Hjs,
    Pug,
    Twig,
    Vash,
}

impl From<ViewArg> for ViewEngine {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::None => Self::None,
            ViewArg::Dust => Self::Dust,
            ViewArg::Ejs => Self::Ejs,
            ViewArg::Hbs => Self::Hbs,
            ViewArg::Hjs => Self::Hjs,
            ViewArg::Pug => Self::Pug,
            ViewArg::Twig => Self::Twig,
            ViewArg::Vash => Self::Vash,
        }
    }
}

/// Stylesheet engines accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CssArg {
    #[value(alias = "plain")]
    Css,
    Less,
    Sass,
    #[value(alias = "styl")]
    Stylus,
    Compass,
}

impl From<CssArg> for CssEngine {
    fn from(arg: CssArg) -> Self {
        match arg {
            CssArg::Css => Self::Plain,
            CssArg::Less => Self::Less,
            CssArg::Sass => Self::Sass,
            CssArg::Stylus => Self::Stylus,
            CssArg::Compass => Self::Compass,
        }
    }
}

/// Cache integrations accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CacheArg {
    None,
    Redis,
}

impl From<CacheArg> for Cache {
    fn from(arg: CacheArg) -> Self {
        match arg {
            CacheArg::None => Self::None,
            CacheArg::Redis => Self::Redis,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "expresso",
            "new",
            "my-api",
            "--lang",
            "ts",
            "--database",
            "sequelize",
        ]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn language_aliases() {
        let cli = Cli::parse_from(["expresso", "new", "x", "-l", "typescript"]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.lang, Some(LangArg::Ts));
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn database_aliases() {
        let cli = Cli::parse_from(["expresso", "new", "x", "--database", "mongo"]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.database, Some(DatabaseArg::Mongoose));
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn css_defaults_to_unset() {
        let cli = Cli::parse_from(["expresso", "new", "x"]);
        if let Commands::New(args) = cli.command {
            assert!(args.css.is_none());
            assert!(!args.no_gitignore);
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn completions_accepts_every_shell() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            assert!(Cli::try_parse_from(["expresso", "completions", shell]).is_ok());
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["expresso", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
