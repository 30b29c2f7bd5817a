//! Catalog backed by payloads compiled into the binary.

use std::collections::HashMap;

use expresso_core::{
    application::{ApplicationError, ports::TemplateCatalog},
    domain::TemplateKey,
    error::ExpressoResult,
};

use crate::payloads::PAYLOADS;

/// Catalog serving the embedded payload table.
///
/// The binary is self-contained: no template directory to locate, nothing
/// to install alongside the executable.
#[derive(Debug, Clone)]
pub struct EmbeddedCatalog {
    payloads: HashMap<&'static str, &'static str>,
}

impl EmbeddedCatalog {
    pub fn new() -> Self {
        Self {
            payloads: PAYLOADS.iter().copied().collect(),
        }
    }

    /// All registered keys, sorted (testing and diagnostics helper).
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.payloads.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for EmbeddedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateCatalog for EmbeddedCatalog {
    fn fetch(&self, key: &TemplateKey) -> ExpressoResult<String> {
        self.payloads
            .get(key.as_str())
            .map(|payload| payload.to_string())
            .ok_or_else(|| {
                ApplicationError::MissingTemplate {
                    key: key.as_str().to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expresso_core::domain::{
        Blueprint, Cache, CssEngine, Database, LanguageVariant, ViewEngine, resolve,
    };

    #[test]
    fn unknown_key_is_reported() {
        let catalog = EmbeddedCatalog::new();
        assert!(catalog.fetch(&TemplateKey::new("nope")).is_err());
    }

    #[test]
    fn payload_keys_are_unique() {
        let catalog = EmbeddedCatalog::new();
        assert_eq!(catalog.keys().len(), crate::payloads::PAYLOADS.len());
    }

    /// Every manifest the resolver can produce must be servable from the
    /// embedded table; a gap here would only surface at generation time.
    #[test]
    fn every_resolvable_entry_has_a_payload() {
        let catalog = EmbeddedCatalog::new();
        let databases = [
            Database::None,
            Database::MongoJs,
            Database::Mongoose,
            Database::Sequelize,
        ];
        let views = [
            ViewEngine::None,
            ViewEngine::Dust,
            ViewEngine::Ejs,
            ViewEngine::Hbs,
            ViewEngine::Hjs,
            ViewEngine::Pug,
            ViewEngine::Twig,
            ViewEngine::Vash,
        ];
        let css_engines = [
            CssEngine::Plain,
            CssEngine::Less,
            CssEngine::Sass,
            CssEngine::Stylus,
            CssEngine::Compass,
        ];

        for variant in [LanguageVariant::Js, LanguageVariant::Ts] {
            for database in databases {
                for view in views {
                    for css in css_engines {
                        for cache in [Cache::None, Cache::Redis] {
                            let mut builder = Blueprint::builder("probe").variant(variant);
                            builder = match builder.database(database) {
                                Ok(b) => b,
                                Err(_) => continue,
                            };
                            builder = match builder.view(view) {
                                Ok(b) => b,
                                Err(_) => continue,
                            };
                            let blueprint = match builder.css(css).cache(cache).build() {
                                Ok(bp) => bp,
                                Err(_) => continue,
                            };
                            let manifest = resolve(&blueprint).unwrap();
                            for entry in manifest.entries() {
                                catalog.fetch(&entry.source).unwrap_or_else(|_| {
                                    panic!("no payload for key {}", entry.source)
                                });
                            }
                        }
                    }
                }
            }
        }
    }
}
