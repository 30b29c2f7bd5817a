//! Domain layer: pure configuration, assembly, and resolution logic.
//!
//! Nothing in this module performs I/O. The application layer drives these
//! types through its ports; adapters supply the actual filesystem and
//! template machinery.

pub mod catalog;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use catalog::resolve;
pub use entities::{
    AssemblyModel, Blueprint, BlueprintBuilder, CodeFragment, FileKind, FileMode,
    MiddlewarePhase, MiddlewareUse, PackageManifest, RelativePath, ResourceEntry,
    ResourceManifest, RouteMount, TemplateKey,
};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{Cache, CssEngine, Database, LanguageVariant, ViewEngine};
