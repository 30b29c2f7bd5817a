//! Infrastructure adapters for Expresso.
//!
//! This crate implements the ports defined in `expresso-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod filesystem;
pub mod payloads;
pub mod renderer;

// Re-export commonly used adapters
pub use catalog::EmbeddedCatalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::RawRenderer;
