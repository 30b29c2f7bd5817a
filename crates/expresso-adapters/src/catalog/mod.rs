//! Template catalog adapters.

pub mod embedded;

pub use embedded::EmbeddedCatalog;
