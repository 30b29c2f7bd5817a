//! Declarative resource catalog and the `resolve` function.
//!
//! The catalog is a set of static tables mapping configuration dimensions to
//! resource groups. `resolve` walks the tables and concatenates the groups
//! into a [`ResourceManifest`] — no branching dispatch buried in writer
//! code, no side effects. A combination the tables don't cover fails fast
//! with [`DomainError::UnknownCombination`] before anything touches disk.
//!
//! Template keys use an `{ext}` placeholder expanded to the blueprint's
//! source extension, so one table row serves both language variants.

use crate::domain::{
    entities::{
        blueprint::Blueprint,
        manifest::{FileKind, ResourceEntry, ResourceManifest},
    },
    error::DomainError,
    value_objects::{Database, ViewEngine},
};

/// One catalog row: a payload key and where it lands.
struct CatalogFile {
    source: &'static str,
    dest: &'static str,
    kind: FileKind,
    executable: bool,
}

const fn template(source: &'static str, dest: &'static str) -> CatalogFile {
    CatalogFile {
        source,
        dest,
        kind: FileKind::Template,
        executable: false,
    }
}

const fn static_copy(source: &'static str, dest: &'static str) -> CatalogFile {
    CatalogFile {
        source,
        dest,
        kind: FileKind::StaticCopy,
        executable: false,
    }
}

// ── Static tables ─────────────────────────────────────────────────────────────

/// Files every skeleton gets, independent of database/view/css/cache.
const BASE_GROUP: &[CatalogFile] = &[
    template("app.{ext}", "server/app.{ext}"),
    CatalogFile {
        source: "www.{ext}",
        dest: "server/bin/www.{ext}",
        kind: FileKind::Template,
        executable: true,
    },
    template("env", ".env"),
    static_copy("eslintrc.json", ".eslintrc.json"),
    static_copy("routes/users.{ext}", "server/routes/users.{ext}"),
    static_copy("controllers/index.{ext}", "server/controllers/index.{ext}"),
];

/// Per-variant tooling config.
const JS_TOOLING: &[CatalogFile] = &[static_copy("babelrc", ".babelrc")];
const TS_TOOLING: &[CatalogFile] = &[static_copy("tsconfig.json", "tsconfig.json")];

/// Database resource groups. Every supported `Database` has a row; a
/// missing row is an unsupported combination and resolving fails.
const DATABASE_GROUPS: &[(Database, &[CatalogFile])] = &[
    (Database::None, &[]),
    (Database::MongoJs, &[]),
    (
        Database::Mongoose,
        &[static_copy(
            "models/mongoose/item.{ext}",
            "server/models/item.{ext}",
        )],
    ),
    (
        Database::Sequelize,
        &[
            static_copy("models/sequelize/index.{ext}", "server/models/index.{ext}"),
            static_copy("models/sequelize/item.{ext}", "server/models/item.{ext}"),
            static_copy("config/config.json", "server/config/config.json"),
        ],
    ),
];

/// View engines with registered partials. Extension equals the engine name.
const VIEW_ENGINES: &[ViewEngine] = &[
    ViewEngine::Dust,
    ViewEngine::Ejs,
    ViewEngine::Hbs,
    ViewEngine::Hjs,
    ViewEngine::Pug,
    ViewEngine::Twig,
    ViewEngine::Vash,
];

/// Directories created alongside view partials.
const PUBLIC_DIRS: &[&str] = &["public/images", "public/javascripts", "public/stylesheets"];

// ── Resolution ────────────────────────────────────────────────────────────────

/// Resolve a blueprint to its resource manifest.
///
/// Pure and deterministic; the returned manifest is validated (unique,
/// non-escaping destinations).
pub fn resolve(blueprint: &Blueprint) -> Result<ResourceManifest, DomainError> {
    let ext = blueprint.variant().file_extension();
    let mut manifest = ResourceManifest::new();

    let mut push_group = |manifest: &mut ResourceManifest, group: &[CatalogFile]| {
        for file in group {
            let mut entry = match file.kind {
                FileKind::Template => {
                    ResourceEntry::template(expand(file.source, ext), expand(file.dest, ext))
                }
                FileKind::StaticCopy => {
                    ResourceEntry::static_copy(expand(file.source, ext), expand(file.dest, ext))
                }
            };
            if file.executable {
                entry = entry.executable();
            }
            manifest.push(entry);
        }
    };

    push_group(&mut manifest, BASE_GROUP);

    // Route index differs by view presence: render a page, or answer JSON.
    let index_key = if blueprint.has_view() {
        "routes/index-view.{ext}"
    } else {
        "routes/index-api.{ext}"
    };
    manifest.push(ResourceEntry::static_copy(
        expand(index_key, ext),
        expand("server/routes/index.{ext}", ext),
    ));

    match blueprint.variant() {
        crate::domain::value_objects::LanguageVariant::Js => push_group(&mut manifest, JS_TOOLING),
        crate::domain::value_objects::LanguageVariant::Ts => push_group(&mut manifest, TS_TOOLING),
    }

    if blueprint.include_gitignore() {
        manifest.push(ResourceEntry::static_copy("gitignore", ".gitignore"));
    }

    let database_group = DATABASE_GROUPS
        .iter()
        .find(|(db, _)| *db == blueprint.database())
        .map(|(_, group)| *group)
        .ok_or_else(|| {
            DomainError::UnknownCombination(format!(
                "database={} variant={}",
                blueprint.database(),
                blueprint.variant()
            ))
        })?;
    push_group(&mut manifest, database_group);

    if blueprint.has_view() {
        resolve_views(blueprint, &mut manifest)?;
    }

    manifest.validate()?;
    Ok(manifest)
}

fn resolve_views(
    blueprint: &Blueprint,
    manifest: &mut ResourceManifest,
) -> Result<(), DomainError> {
    let engine = blueprint.view();
    if !VIEW_ENGINES.contains(&engine) {
        return Err(DomainError::UnknownCombination(format!(
            "view={} variant={}",
            engine,
            blueprint.variant()
        )));
    }

    let view_ext = engine.file_extension();
    for partial in ["index", "error"] {
        manifest.push(ResourceEntry::static_copy(
            format!("views/{partial}.{view_ext}"),
            format!("server/views/{partial}.{view_ext}"),
        ));
    }

    for dir in PUBLIC_DIRS {
        manifest.push_dir(*dir);
    }

    let css_ext = blueprint.css().file_extension();
    manifest.push(ResourceEntry::static_copy(
        format!("stylesheets/style.{css_ext}"),
        format!("public/stylesheets/style.{css_ext}"),
    ));

    Ok(())
}

fn expand(pattern: &str, ext: &str) -> String {
    pattern.replace("{ext}", ext)
}
