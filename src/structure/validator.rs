// Tue Jan 13 2026 - Alex

use crate::structure::{LayoutError, StructureTemplate};

/// Final check run on every template before it is rendered.
pub struct TemplateValidator;

impl TemplateValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, template: &StructureTemplate) -> Result<(), LayoutError> {
        let members = template.members();

        for pair in members.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            if current.end() > next.location().as_u64() {
                return Err(LayoutError::ValidationFailed(format!(
                    "{} overlaps {}",
                    current, next
                )));
            }
            if current.end() != next.location().as_u64() {
                return Err(LayoutError::ValidationFailed(format!(
                    "unpadded gap between {} and {}",
                    current, next
                )));
            }
        }

        if let (Some(size), Some(last)) = (template.declared_size().known(), members.last()) {
            if last.end() != size {
                return Err(LayoutError::ValidationFailed(format!(
                    "members end at 0x{:X}, declared size is 0x{:X}",
                    last.end(),
                    size
                )));
            }
        }

        Ok(())
    }
}

impl Default for TemplateValidator {
    fn default() -> Self {
        Self::new()
    }
}
