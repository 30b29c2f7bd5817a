//! Application layer for Expresso.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, the guard)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerateReport, GenerateService};

pub use ports::{DirState, Filesystem, OverwriteConfirmation, TemplateCatalog, TemplateEngine};

pub use error::ApplicationError;
