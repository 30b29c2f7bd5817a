//! Template rendering adapters.

pub mod raw;

pub use raw::RawRenderer;
