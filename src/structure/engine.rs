// Tue Jan 13 2026 - Alex

//! Turns a bag of member candidates into a finished, padded template.
//!
//! Candidates are sorted by `(location, width)`, exact repeats are collapsed,
//! and members that share a location with different widths are reduced to the
//! narrowest one. Wider competitors are recorded on the survivor, never kept.

use crate::config::LayoutConfig;
use crate::structure::{LayoutError, LayoutWarning, Member, Padder, Size, StructureTemplate};
use itertools::Itertools;

#[derive(Debug, Clone)]
pub struct LayoutOutcome {
    pub template: StructureTemplate,
    pub warnings: Vec<LayoutWarning>,
}

pub struct LayoutEngine<'a> {
    config: &'a LayoutConfig,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    pub fn build(
        &self,
        name: String,
        declared_size: Size,
        candidates: Vec<Member>,
    ) -> Result<LayoutOutcome, LayoutError> {
        let mut warnings = Vec::new();

        let candidate_count = candidates.len();

        let (mut members, collapsed) = sort_and_dedup(candidates);
        if collapsed > 0 {
            warnings.push(LayoutWarning::DuplicatesCollapsed { count: collapsed });
        }

        let tagged = mark_conflicts(&mut members);
        let members = resolve_conflicts(members, &tagged);
        warnings.extend(members.iter().filter(|m| !m.conflicts().is_empty()).map(|m| {
            LayoutWarning::ConflictResolved {
                location: m.location(),
                kept: m.width_bits(),
                dropped: m.conflicts().to_vec(),
            }
        }));

        if members.is_empty() {
            warnings.push(LayoutWarning::NoEntries);
        }

        let padder = Padder::new(&self.config.padding_type, &self.config.padding_prefix);
        let members = padder.pad(members, declared_size)?;

        for warning in &warnings {
            log::warn!("{}: {}", name, warning);
        }
        log::info!(
            "{}: {} candidate(s) -> {} member(s), size {}",
            name,
            candidate_count,
            members.len(),
            declared_size
        );

        Ok(LayoutOutcome {
            template: StructureTemplate::new(name, declared_size, members),
            warnings,
        })
    }
}

/// Sorts by `(location, width)` and collapses exact repeats.
/// Returns the survivors and how many repeats were dropped.
pub fn sort_and_dedup(candidates: Vec<Member>) -> (Vec<Member>, usize) {
    let before = candidates.len();
    let members: Vec<Member> = candidates
        .into_iter()
        .sorted_by_key(|m| (m.location(), m.width_bits()))
        .dedup_by(|a, b| a.location() == b.location() && a.width_bits() == b.width_bits())
        .collect();
    let collapsed = before - members.len();
    (members, collapsed)
}

/// Records every competing width on the narrowest member of each shared
/// location and tags the competitors for removal.
///
/// `members` must already be sorted and deduplicated.
pub fn mark_conflicts(members: &mut [Member]) -> Vec<bool> {
    let mut tagged = vec![false; members.len()];
    let mut start = 0;

    while start < members.len() {
        let location = members[start].location();
        let end = members[start..]
            .iter()
            .position(|m| m.location() != location)
            .map_or(members.len(), |n| start + n);

        for idx in start + 1..end {
            let width = members[idx].width_bits();
            members[start].record_conflict(width);
            tagged[idx] = true;
        }
        start = end;
    }

    tagged
}

pub fn resolve_conflicts(members: Vec<Member>, tagged: &[bool]) -> Vec<Member> {
    members
        .into_iter()
        .zip(tagged.iter())
        .filter(|(_, drop)| !**drop)
        .map(|(member, _)| member)
        .collect()
}
