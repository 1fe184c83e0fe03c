// Tue Jan 13 2026 - Alex

use crate::structure::{Member, Size};

/// A finished structure layout: members ascending by location, gaps padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureTemplate {
    name: String,
    declared_size: Size,
    members: Vec<Member>,
}

impl StructureTemplate {
    pub fn new(name: String, declared_size: Size, members: Vec<Member>) -> Self {
        Self {
            name,
            declared_size,
            members,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_size(&self) -> Size {
        self.declared_size
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| !m.is_padding())
    }

    pub fn padding(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.is_padding())
    }

    /// Total bytes covered by members, padding included.
    pub fn covered_bytes(&self) -> u64 {
        self.members.iter().map(Member::byte_width).sum()
    }
}
