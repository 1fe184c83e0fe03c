// Tue Jan 13 2026 - Alex

use crate::structure::{LayoutWarning, MemberKind, StructureTemplate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SerializableTemplate {
    pub name: String,
    pub declared_size: u64,
    pub members: Vec<SerializableMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SerializableMember {
    pub kind: MemberKind,
    pub type_label: String,
    pub name: String,
    pub location: u64,
    pub width_bits: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub annotation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<u32>,
}

impl SerializableTemplate {
    pub fn with_warnings(mut self, warnings: &[LayoutWarning]) -> Self {
        self.warnings = warnings.iter().map(ToString::to_string).collect();
        self
    }
}

impl From<&StructureTemplate> for SerializableTemplate {
    fn from(template: &StructureTemplate) -> Self {
        Self {
            name: template.name().to_string(),
            declared_size: template.declared_size().as_u64(),
            members: template.members().iter().map(|m| SerializableMember {
                kind: m.kind(),
                type_label: m.type_label().to_string(),
                name: m.name().to_string(),
                location: m.location().as_u64(),
                width_bits: m.width_bits(),
                annotation: m.annotation().to_string(),
                conflicts: m.conflicts().to_vec(),
            }).collect(),
            warnings: Vec::new(),
        }
    }
}
