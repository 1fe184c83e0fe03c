// Tue Jan 13 2026 - Alex

use crate::structure::{LayoutError, Member, Offset, Size};

/// Fills gaps between members, and up to the declared size, with byte padding.
pub struct Padder<'a> {
    padding_type: &'a str,
    prefix: &'a str,
}

impl<'a> Padder<'a> {
    pub fn new(padding_type: &'a str, prefix: &'a str) -> Self {
        Self { padding_type, prefix }
    }

    /// `members` must be sorted by location with no shared locations.
    pub fn pad(&self, members: Vec<Member>, declared_size: Size) -> Result<Vec<Member>, LayoutError> {
        let mut padded = Vec::with_capacity(members.len() * 2);
        let mut iter = members.into_iter().peekable();

        while let Some(member) = iter.next() {
            let end = member.end();
            let gap = match iter.peek() {
                Some(next) => {
                    let next_location = next.location().as_u64();
                    next_location.checked_sub(end).ok_or_else(|| LayoutError::OverlapInvariantViolated {
                        member: member.name().to_string(),
                        end,
                        next: next.name().to_string(),
                        next_location,
                    })?
                }
                None => match declared_size.known() {
                    Some(size) => size.checked_sub(end).ok_or_else(|| LayoutError::MemberOutOfBounds {
                        member: member.name().to_string(),
                        end,
                        declared_size: size,
                    })?,
                    None => 0,
                },
            };

            padded.push(member);
            if gap > 0 {
                padded.push(Member::padding(Offset::new(end), gap, self.padding_type, self.prefix)?);
            }
        }

        Ok(padded)
    }
}
