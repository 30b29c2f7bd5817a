//! Raw substitution renderer.
//!
//! Replaces `{{name}}` placeholders with local values byte-for-byte. There
//! is deliberately no escaping path in this type: the locals are verbatim
//! program text (import blocks, middleware registrations, database init
//! code), and escaping them would turn the generated application's wiring
//! into inert string literals.

use std::collections::BTreeMap;

use expresso_core::{
    application::{ApplicationError, ports::TemplateEngine},
    error::ExpressoResult,
};
use tracing::instrument;

/// Renderer performing raw `{{name}}` substitution.
#[derive(Debug, Clone, Copy)]
pub struct RawRenderer;

impl RawRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RawRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for RawRenderer {
    #[instrument(skip_all)]
    fn render(&self, source: &str, locals: &BTreeMap<String, String>) -> ExpressoResult<String> {
        let mut output = String::with_capacity(source.len());
        let mut rest = source;

        while let Some(start) = rest.find("{{") {
            output.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                return Err(ApplicationError::RenderingFailed {
                    key: "<inline>".into(),
                    reason: "unterminated {{ placeholder".into(),
                }
                .into());
            };
            let name = after[..end].trim();
            // An unknown placeholder is a template/locals mismatch; failing
            // beats emitting a file with a hole in it.
            let value = locals.get(name).ok_or_else(|| {
                expresso_core::error::ExpressoError::from(ApplicationError::RenderingFailed {
                    key: name.to_string(),
                    reason: "no local bound to placeholder".into(),
                })
            })?;
            output.push_str(value);
            rest = &after[end + 2..];
        }
        output.push_str(rest);
        Ok(output)
    }
}
