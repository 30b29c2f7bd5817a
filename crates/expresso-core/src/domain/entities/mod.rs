//! Domain entities: the blueprint, the assembly model, and the resource plan.

pub mod assembly;
pub mod blueprint;
pub mod common;
pub mod manifest;
pub mod package;

pub use assembly::{AssemblyModel, CodeFragment, MiddlewarePhase, MiddlewareUse, RouteMount};
pub use blueprint::{Blueprint, BlueprintBuilder};
pub use common::{FileMode, RelativePath};
pub use manifest::{FileKind, ResourceEntry, ResourceManifest, TemplateKey};
pub use package::PackageManifest;
