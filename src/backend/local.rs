//! Template-fill backend.

use crate::error::Result;
use crate::placeholder::{FieldMap, substitute};
use crate::template::TemplateDescriptor;

/// Produces the letter by filling a loaded template.
#[derive(Debug, Clone)]
pub struct LocalTemplate {
    template: TemplateDescriptor,
}

impl LocalTemplate {
    pub fn new(template: TemplateDescriptor) -> Self {
        Self { template }
    }

    pub fn generate(&self, fields: &FieldMap) -> Result<String> {
        log::debug!("filling template '{}'", self.template.identifier);
        substitute(&self.template.raw_text, fields)
    }
}
