//! Generate Service - main application orchestrator.
//!
//! Coordinates the full generation workflow:
//! 1. Build the assembly model from the blueprint
//! 2. Resolve the resource manifest
//! 3. Run the destination guard
//! 4. Materialize the manifest (directories, rendered files, static copies)
//! 5. Write the derived `package.json`
//!
//! Everything before step 3 is pure; `plan` stops there and powers
//! `--dry-run` for free.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, OverwriteConfirmation, TemplateCatalog, TemplateEngine},
        services::destination_guard,
    },
    domain::{
        AssemblyModel, Blueprint, FileKind, FileMode, PackageManifest, ResourceManifest, resolve,
    },
    error::ExpressoResult,
};

/// What a generation run produced, for CLI display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub destination: PathBuf,
    /// Created paths relative to the destination, in write order.
    pub created: Vec<String>,
}

/// Main generation service.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
    engine: Box<dyn TemplateEngine>,
    catalog: Box<dyn TemplateCatalog>,
    confirmation: Box<dyn OverwriteConfirmation>,
}

impl GenerateService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        engine: Box<dyn TemplateEngine>,
        catalog: Box<dyn TemplateCatalog>,
        confirmation: Box<dyn OverwriteConfirmation>,
    ) -> Self {
        Self {
            filesystem,
            engine,
            catalog,
            confirmation,
        }
    }

    /// Resolve the blueprint without touching the filesystem.
    ///
    /// Returns the same created-path listing `generate` would report.
    pub fn plan(&self, blueprint: &Blueprint) -> ExpressoResult<GenerateReport> {
        let manifest = resolve(blueprint)?;
        // Assembly is built even though its output is unused here: a
        // combination that cannot assemble must fail a dry run too.
        AssemblyModel::build(blueprint)?;
        Ok(Self::report(blueprint, &manifest))
    }

    /// Generate the project skeleton.
    #[instrument(
        skip_all,
        fields(
            app = %blueprint.app_name(),
            variant = %blueprint.variant(),
            destination = %blueprint.destination().display()
        )
    )]
    pub fn generate(&self, blueprint: &Blueprint) -> ExpressoResult<GenerateReport> {
        let assembly = AssemblyModel::build(blueprint)?;
        let manifest = resolve(blueprint)?;
        let locals = assembly.locals(blueprint);

        destination_guard::ensure_clean(
            self.filesystem.as_ref(),
            self.confirmation.as_ref(),
            blueprint.destination(),
        )?;

        let destination = blueprint.destination();
        self.filesystem.create_dir_all(destination)?;

        for dir in manifest.directories() {
            self.filesystem.create_dir_all(&destination.join(dir))?;
        }

        for entry in manifest.entries() {
            let payload = self.catalog.fetch(&entry.source)?;
            let content = match entry.kind {
                FileKind::Template => self.engine.render(&payload, &locals)?,
                FileKind::StaticCopy => payload,
            };

            let target = destination.join(&entry.dest);
            if let Some(parent) = target.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&target, &content, entry.mode)?;
        }

        let package = PackageManifest::derive(blueprint, &assembly);
        let package_json = package
            .to_json()
            .map_err(|e| ApplicationError::SerializationFailed {
                reason: e.to_string(),
            })?;
        self.filesystem.write_file(
            &destination.join("package.json"),
            &package_json,
            FileMode::Regular,
        )?;

        let report = Self::report(blueprint, &manifest);
        info!(files = report.created.len(), "generation completed");
        Ok(report)
    }

    fn report(blueprint: &Blueprint, manifest: &ResourceManifest) -> GenerateReport {
        let mut created: Vec<String> = manifest
            .directories()
            .iter()
            .map(|d| format!("{d}/"))
            .collect();
        created.extend(manifest.entries().iter().map(|e| e.dest.to_string()));
        created.push("package.json".to_string());

        GenerateReport {
            destination: blueprint.destination().to_path_buf(),
            created,
        }
    }
}
