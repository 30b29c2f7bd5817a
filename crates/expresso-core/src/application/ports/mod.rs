//! Application ports (traits).

pub mod output;

pub use output::{
    DirState, Filesystem, OverwriteConfirmation, TemplateCatalog, TemplateEngine,
};
