//! Domain value objects: LanguageVariant, Database, ViewEngine, CssEngine, Cache.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! They hold NO combination logic. Which selections are legal together is
//! decided by `BlueprintBuilder`, and which files/modules a selection pulls
//! in lives in `catalog.rs` and `assembly.rs`. This file's only job is to
//! define the types, their string representations, and their `FromStr`
//! parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a catalog entry in `catalog.rs` and (if it wires middleware or
//!    dependencies) a stage contribution in `entities/assembly.rs`
//! 4. Done — nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── LanguageVariant ──────────────────────────────────────────────────────────

/// The scripting-language variant of the generated application.
///
/// The variant gates the rest of the option matrix: view engines and the
/// `mongojs` driver are only available under [`LanguageVariant::Js`].
/// That rule is enforced by `BlueprintBuilder`, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageVariant {
    Js,
    Ts,
}

impl LanguageVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Ts => "ts",
        }
    }

    /// Source file extension for the generated entrypoint and bootstrap.
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Ts => "ts",
        }
    }
}

impl fmt::Display for LanguageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "js" | "javascript" => Ok(Self::Js),
            "ts" | "typescript" => Ok(Self::Ts),
            other => Err(DomainError::InvalidSelection(format!(
                "unknown language variant: {other}"
            ))),
        }
    }
}

// ── Database ─────────────────────────────────────────────────────────────────

/// Database integration shipped with the generated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    None,
    MongoJs,
    /// MongoDB via the Mongoose ODM.
    Mongoose,
    /// SQL via the Sequelize ORM (MySQL driver).
    Sequelize,
}

impl Database {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::MongoJs => "mongojs",
            Self::Mongoose => "mongoose",
            Self::Sequelize => "sequelize",
        }
    }

    /// Whether this selection emits a connection-string placeholder in `.env`.
    pub const fn needs_env_placeholder(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Database {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "mongojs" => Ok(Self::MongoJs),
            "mongoose" | "mongo" | "mongodb" => Ok(Self::Mongoose),
            "sequelize" | "sql" | "mysql" => Ok(Self::Sequelize),
            other => Err(DomainError::InvalidSelection(format!(
                "unknown database: {other}"
            ))),
        }
    }
}

// ── ViewEngine ───────────────────────────────────────────────────────────────

/// Server-side view engine, or `None` for an API-only skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewEngine {
    None,
    Dust,
    Ejs,
    Hbs,
    Hjs,
    Pug,
    Twig,
    Vash,
}

impl ViewEngine {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Dust => "dust",
            Self::Ejs => "ejs",
            Self::Hbs => "hbs",
            Self::Hjs => "hjs",
            Self::Pug => "pug",
            Self::Twig => "twig",
            Self::Vash => "vash",
        }
    }

    pub const fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }

    /// View partial file extension; equals the engine name for every
    /// supported engine.
    pub const fn file_extension(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ViewEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewEngine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "api" => Ok(Self::None),
            "dust" => Ok(Self::Dust),
            "ejs" => Ok(Self::Ejs),
            "hbs" | "handlebars" => Ok(Self::Hbs),
            "hjs" | "hogan" => Ok(Self::Hjs),
            "pug" => Ok(Self::Pug),
            "twig" => Ok(Self::Twig),
            "vash" => Ok(Self::Vash),
            other => Err(DomainError::InvalidSelection(format!(
                "unknown view engine: {other}"
            ))),
        }
    }
}

// ── CssEngine ────────────────────────────────────────────────────────────────

/// Stylesheet preprocessor for `public/stylesheets`.
///
/// `Plain` means unprocessed CSS; it is always a legal choice. The others
/// additionally wire a compile middleware into the entrypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssEngine {
    Plain,
    Less,
    Sass,
    Stylus,
    Compass,
}

impl CssEngine {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "css",
            Self::Less => "less",
            Self::Sass => "sass",
            Self::Stylus => "stylus",
            Self::Compass => "compass",
        }
    }

    /// Extension of the stylesheet sources this engine consumes.
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::Plain => "css",
            Self::Less => "less",
            Self::Sass => "sass",
            Self::Stylus => "styl",
            Self::Compass => "scss",
        }
    }
}

impl fmt::Display for CssEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CssEngine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" | "plain" | "none" => Ok(Self::Plain),
            "less" => Ok(Self::Less),
            "sass" => Ok(Self::Sass),
            "stylus" | "styl" => Ok(Self::Stylus),
            "compass" | "scss" => Ok(Self::Compass),
            other => Err(DomainError::InvalidSelection(format!(
                "unknown css engine: {other}"
            ))),
        }
    }
}

// ── Cache ────────────────────────────────────────────────────────────────────

/// Caching layer wired into the generated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cache {
    None,
    Redis,
}

impl Cache {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Redis => "redis",
        }
    }

    pub const fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cache {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "redis" => Ok(Self::Redis),
            other => Err(DomainError::InvalidSelection(format!(
                "unknown cache: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_display_is_lowercase() {
        assert_eq!(LanguageVariant::Js.to_string(), "js");
        assert_eq!(LanguageVariant::Ts.to_string(), "ts");
    }

    #[test]
    fn variant_from_str_accepts_aliases() {
        assert_eq!(
            "javascript".parse::<LanguageVariant>().unwrap(),
            LanguageVariant::Js
        );
        assert_eq!(
            "typescript".parse::<LanguageVariant>().unwrap(),
            LanguageVariant::Ts
        );
    }

    #[test]
    fn database_from_str_accepts_aliases() {
        assert_eq!("mongo".parse::<Database>().unwrap(), Database::Mongoose);
        assert_eq!("sql".parse::<Database>().unwrap(), Database::Sequelize);
        assert!("dynamodb".parse::<Database>().is_err());
    }

    #[test]
    fn view_engine_extension_matches_name() {
        for engine in [
            ViewEngine::Dust,
            ViewEngine::Ejs,
            ViewEngine::Hbs,
            ViewEngine::Hjs,
            ViewEngine::Pug,
            ViewEngine::Twig,
            ViewEngine::Vash,
        ] {
            assert_eq!(engine.file_extension(), engine.as_str());
        }
    }

    #[test]
    fn css_extensions_differ_from_names_where_needed() {
        assert_eq!(CssEngine::Stylus.file_extension(), "styl");
        assert_eq!(CssEngine::Compass.file_extension(), "scss");
        assert_eq!(CssEngine::Plain.file_extension(), "css");
    }

    #[test]
    fn unknown_selection_errors() {
        assert!("java".parse::<LanguageVariant>().is_err());
        assert!("memcached".parse::<Cache>().is_err());
        assert!("jade".parse::<ViewEngine>().is_err());
    }
}
