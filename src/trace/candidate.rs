// Tue Jan 13 2026 - Alex

use crate::structure::{LayoutError, Member};
use crate::trace::{AccessFact, ResolvedOffset};

/// Turns access facts into member candidates for the layout engine.
pub struct CandidateBuilder;

impl CandidateBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Facts whose base could not be resolved carry no usable location and are dropped.
    pub fn build(&self, facts: &[AccessFact]) -> Result<Vec<Member>, LayoutError> {
        let mut members = Vec::with_capacity(facts.len());

        for fact in facts {
            match fact.offset() {
                ResolvedOffset::Resolved(offset) => {
                    let width = fact.width_bits();
                    members.push(Member::field(
                        width,
                        format!("uint{}_t", width),
                        format!("unk_{:02X}", offset.as_u64()),
                        offset,
                    )?);
                }
                ResolvedOffset::Unresolved { delta } => {
                    log::debug!("dropping {}: unresolved base (delta 0x{:X})", fact, delta);
                }
            }
        }

        Ok(members)
    }
}

impl Default for CandidateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
