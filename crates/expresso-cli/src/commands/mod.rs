//! Command handlers.

pub mod completions;
pub mod list;
pub mod new;
