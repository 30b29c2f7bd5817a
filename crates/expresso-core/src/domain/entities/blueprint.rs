//! The `Blueprint` aggregate root and its typestate builder.
//!
//! A `Blueprint` is the fully-resolved, validated record of user choices the
//! generator runs from. All cross-option rules are enforced at build time;
//! once a `Blueprint` exists it is guaranteed consistent and it never
//! changes afterwards.
//!
//! # Typestate builder
//!
//! The builder uses two phantom marker types (`NoVariant` / `HasVariant`) to
//! enforce at *compile time* that the language variant is set before any
//! option it gates. Runtime validation (`validate`) is still called at
//! `build()` to catch cross-field invariants that cannot be expressed in the
//! type system.
//!
//! # Variant gating
//!
//! View support requires the JS variant, and so does the `mongojs` driver.
//! This is an explicit, validated precondition of the core — the option
//! presentation layer must never hand us a TS blueprint with a view engine,
//! and if it does the builder rejects it rather than silently coercing.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    value_objects::{Cache, CssEngine, Database, LanguageVariant, ViewEngine},
};

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A fully-validated generation configuration.
///
/// Guaranteed on construction:
/// - `view` and `css` are only non-default under [`LanguageVariant::Js`]
/// - `database` is never `MongoJs` under [`LanguageVariant::Ts`]
/// - a non-plain `css` implies a view engine is selected
/// - `app_name` contains at least one alphanumeric character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    app_name: String,
    variant: LanguageVariant,
    database: Database,
    view: ViewEngine,
    css: CssEngine,
    cache: Cache,
    include_gitignore: bool,
    destination: PathBuf,
}

impl Blueprint {
    /// Start building a new `Blueprint` for the named application.
    pub fn builder(app_name: impl Into<String>) -> BlueprintBuilder<NoVariant> {
        BlueprintBuilder::new(app_name)
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }
    pub const fn variant(&self) -> LanguageVariant {
        self.variant
    }
    pub const fn database(&self) -> Database {
        self.database
    }
    pub const fn view(&self) -> ViewEngine {
        self.view
    }
    pub const fn css(&self) -> CssEngine {
        self.css
    }
    pub const fn cache(&self) -> Cache {
        self.cache
    }
    pub const fn include_gitignore(&self) -> bool {
        self.include_gitignore
    }
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Whether view-mode resources (views/, public/) are materialized.
    pub const fn has_view(&self) -> bool {
        self.view.is_some()
    }

    /// Kebab-cased package name, the way npm expects it.
    ///
    /// `"My Cool App"` → `"my-cool-app"`.
    pub fn kebab_name(&self) -> String {
        kebab_case(&self.app_name)
    }

    /// Validate this blueprint's internal consistency.
    ///
    /// Called automatically by the builder. Available for re-validation after
    /// external construction.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_app_name(&self.app_name)?;

        if self.variant == LanguageVariant::Ts {
            if self.view.is_some() {
                return Err(incompatible(self.view.as_str(), self.variant));
            }
            if self.database == Database::MongoJs {
                return Err(incompatible(self.database.as_str(), self.variant));
            }
        }

        // A css preprocessor without a view engine would wire middleware
        // against stylesheets that are never served.
        if self.css != CssEngine::Plain && !self.view.is_some() {
            return Err(DomainError::InvalidSelection(format!(
                "css engine '{}' requires a view engine",
                self.css
            )));
        }

        Ok(())
    }
}

impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, db={}, view={}, cache={})",
            self.app_name, self.variant, self.database, self.view, self.cache
        )
    }
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: language variant has not yet been set.
pub struct NoVariant;
/// Marker: variant has been set; gated options may now be configured.
pub struct HasVariant;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`Blueprint`].
///
/// Compile-time guarantee: `database`, `view`, `css`, and `cache` are only
/// accessible after `variant` has been set, because the variant decides which
/// of them are legal.
pub struct BlueprintBuilder<V> {
    app_name: String,
    variant: Option<LanguageVariant>,
    database: Database,
    view: ViewEngine,
    css: CssEngine,
    cache: Cache,
    include_gitignore: bool,
    destination: Option<PathBuf>,
    _marker: PhantomData<V>,
}

impl BlueprintBuilder<NoVariant> {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            variant: None,
            database: Database::None,
            view: ViewEngine::None,
            css: CssEngine::Plain,
            cache: Cache::None,
            include_gitignore: true,
            destination: None,
            _marker: PhantomData,
        }
    }

    /// Set the language variant. This transitions the builder to `HasVariant`.
    pub fn variant(self, variant: LanguageVariant) -> BlueprintBuilder<HasVariant> {
        BlueprintBuilder {
            app_name: self.app_name,
            variant: Some(variant),
            database: self.database,
            view: self.view,
            css: self.css,
            cache: self.cache,
            include_gitignore: self.include_gitignore,
            destination: self.destination,
            _marker: PhantomData,
        }
    }
}

impl BlueprintBuilder<HasVariant> {
    /// Set the database integration.
    ///
    /// Rejects immediately if the driver is unavailable under the chosen
    /// variant (`mongojs` is JS-only).
    pub fn database(mut self, database: Database) -> Result<Self, DomainError> {
        let variant = self.variant.expect("typestate guarantees variant is set");
        if variant == LanguageVariant::Ts && database == Database::MongoJs {
            return Err(incompatible(database.as_str(), variant));
        }
        self.database = database;
        Ok(self)
    }

    /// Set the view engine.
    ///
    /// Rejects immediately under the TS variant — view support requires JS.
    pub fn view(mut self, view: ViewEngine) -> Result<Self, DomainError> {
        let variant = self.variant.expect("typestate guarantees variant is set");
        if variant == LanguageVariant::Ts && view.is_some() {
            return Err(incompatible(view.as_str(), variant));
        }
        self.view = view;
        Ok(self)
    }

    /// Set the stylesheet engine. Requires a view engine; checked at `build()`
    /// since the two setters may run in either order.
    pub fn css(mut self, css: CssEngine) -> Self {
        self.css = css;
        self
    }

    /// Set the caching layer.
    pub fn cache(mut self, cache: Cache) -> Self {
        self.cache = cache;
        self
    }

    /// Whether to materialize a `.gitignore`. Defaults to `true`.
    pub fn gitignore(mut self, include: bool) -> Self {
        self.include_gitignore = include;
        self
    }

    /// Destination directory. Defaults to `./<app_name>`.
    pub fn destination(mut self, dest: impl Into<PathBuf>) -> Self {
        self.destination = Some(dest.into());
        self
    }

    /// Finalize, running full cross-field validation.
    pub fn build(self) -> Result<Blueprint, DomainError> {
        let app_name = self.app_name;
        let destination = self
            .destination
            .unwrap_or_else(|| PathBuf::from(format!("./{app_name}")));

        let blueprint = Blueprint {
            app_name,
            variant: self.variant.expect("typestate guarantees variant is set"),
            database: self.database,
            view: self.view,
            css: self.css,
            cache: self.cache,
            include_gitignore: self.include_gitignore,
            destination,
        };
        blueprint.validate()?;
        Ok(blueprint)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn incompatible(selection: &str, variant: LanguageVariant) -> DomainError {
    DomainError::IncompatibleSelection {
        selection: selection.to_string(),
        variant: variant.to_string(),
        reason: "view engines and mongojs are only available under the js variant".into(),
    }
}

fn validate_app_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidAppName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(DomainError::InvalidAppName {
            name: name.into(),
            reason: "name must contain at least one letter or digit".into(),
        });
    }
    if name.starts_with('.') {
        return Err(DomainError::InvalidAppName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    Ok(())
}

/// Lowercase the input and collapse every run of non-alphanumeric characters
/// into a single hyphen, trimming hyphens at both ends.
pub fn kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_sep = false;
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_minimal_js() {
        let bp = Blueprint::builder("hello-world")
            .variant(LanguageVariant::Js)
            .build()
            .unwrap();

        assert_eq!(bp.app_name(), "hello-world");
        assert_eq!(bp.database(), Database::None);
        assert_eq!(bp.view(), ViewEngine::None);
        assert!(bp.include_gitignore());
        assert_eq!(bp.destination(), Path::new("./hello-world"));
    }

    #[test]
    fn builder_full_js() {
        let bp = Blueprint::builder("blog")
            .variant(LanguageVariant::Js)
            .database(Database::Mongoose)
            .unwrap()
            .view(ViewEngine::Pug)
            .unwrap()
            .css(CssEngine::Sass)
            .cache(Cache::Redis)
            .gitignore(false)
            .destination("/tmp/blog")
            .build()
            .unwrap();

        assert_eq!(bp.view(), ViewEngine::Pug);
        assert_eq!(bp.css(), CssEngine::Sass);
        assert!(!bp.include_gitignore());
    }

    #[test]
    fn ts_rejects_view_engine() {
        let result = Blueprint::builder("api")
            .variant(LanguageVariant::Ts)
            .view(ViewEngine::Ejs);

        assert!(matches!(
            result,
            Err(DomainError::IncompatibleSelection { .. })
        ));
    }

    #[test]
    fn ts_rejects_mongojs() {
        let result = Blueprint::builder("api")
            .variant(LanguageVariant::Ts)
            .database(Database::MongoJs);

        assert!(matches!(
            result,
            Err(DomainError::IncompatibleSelection { .. })
        ));
    }

    #[test]
    fn ts_accepts_sequelize() {
        let bp = Blueprint::builder("api")
            .variant(LanguageVariant::Ts)
            .database(Database::Sequelize)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(bp.database(), Database::Sequelize);
    }

    #[test]
    fn css_without_view_is_invalid() {
        let result = Blueprint::builder("app")
            .variant(LanguageVariant::Js)
            .css(CssEngine::Less)
            .build();

        assert!(matches!(result, Err(DomainError::InvalidSelection(_))));
    }

    #[test]
    fn empty_name_is_invalid() {
        let result = Blueprint::builder("  ")
            .variant(LanguageVariant::Js)
            .build();
        assert!(matches!(result, Err(DomainError::InvalidAppName { .. })));
    }

    #[test]
    fn dotfile_name_is_invalid() {
        let result = Blueprint::builder(".hidden")
            .variant(LanguageVariant::Js)
            .build();
        assert!(matches!(result, Err(DomainError::InvalidAppName { .. })));
    }

    #[test]
    fn kebab_name_matches_npm_convention() {
        let bp = Blueprint::builder("My Cool App")
            .variant(LanguageVariant::Js)
            .build()
            .unwrap();
        assert_eq!(bp.kebab_name(), "my-cool-app");
    }

    #[test]
    fn kebab_case_collapses_separator_runs() {
        assert_eq!(kebab_case("Foo__Bar  Baz"), "foo-bar-baz");
        assert_eq!(kebab_case("--leading--"), "leading");
        assert_eq!(kebab_case("already-kebab"), "already-kebab");
    }
}
