//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `expresso-adapters` crate provides implementations.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::{FileMode, TemplateKey};
use crate::error::ExpressoResult;

/// Observed state of a destination directory, from a read-only probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirState {
    Missing,
    Empty,
    NonEmpty,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `expresso_adapters::filesystem::LocalFilesystem` (production)
/// - `expresso_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> ExpressoResult<()>;

    /// Write content to a file with the given mode.
    fn write_file(&self, path: &Path, content: &str, mode: FileMode) -> ExpressoResult<()>;

    /// Probe a directory without modifying it.
    fn probe_dir(&self, path: &Path) -> ExpressoResult<DirState>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ExpressoResult<()>;
}

/// Port for template payload retrieval.
///
/// Implemented by `expresso_adapters::catalog::EmbeddedCatalog` (payloads
/// compiled into the binary).
pub trait TemplateCatalog: Send + Sync {
    /// Fetch the payload text for a key.
    fn fetch(&self, key: &TemplateKey) -> ExpressoResult<String>;
}

/// Port for template rendering.
///
/// Implemented by `expresso_adapters::renderer::RawRenderer`.
///
/// The contract is RAW substitution: local values are verbatim program
/// text and must be inserted byte-for-byte. An implementation that escapes
/// values would corrupt every generated source file.
pub trait TemplateEngine: Send + Sync {
    fn render(&self, source: &str, locals: &BTreeMap<String, String>) -> ExpressoResult<String>;
}

/// Port for the destination-overwrite decision.
///
/// The CLI implements this with `--force` or an interactive prompt; tests
/// use canned answers.
pub trait OverwriteConfirmation: Send + Sync {
    /// Whether a non-empty destination may be erased. `Ok(false)` is a
    /// clean abort, not an error.
    fn confirm_erase(&self, path: &Path) -> ExpressoResult<bool>;
}
