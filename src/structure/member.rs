// Tue Jan 13 2026 - Alex

use crate::parsing::{embedded_digits, parse_decimal};
use crate::structure::{LayoutError, Offset};
use serde::{Deserialize, Serialize};
use std::fmt;

const POINTER_MARKER: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Padding,
}

/// One structure member, either observed/declared or synthesized padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    kind: MemberKind,
    width_bits: u32,
    type_label: String,
    name: String,
    location: Offset,
    annotation: String,
    conflicts: Vec<u32>,
}

impl Member {
    /// Builds a field with an explicit width, as produced from an access trace.
    pub fn field(
        width_bits: u32,
        type_label: impl Into<String>,
        name: impl Into<String>,
        location: Offset,
    ) -> Result<Self, LayoutError> {
        let type_label = type_label.into();
        validate_width(&type_label, width_bits)?;
        let name = name.into();
        checked_end(&name, location, u64::from(width_bits / 8))?;
        Ok(Self {
            kind: MemberKind::Field,
            width_bits,
            type_label,
            name,
            location,
            annotation: String::new(),
            conflicts: Vec::new(),
        })
    }

    /// Builds a field from a written declaration, deriving its width from the type.
    ///
    /// A `*` in either the type or the name makes the member a pointer of
    /// `pointer_width_bits`. Otherwise the width is the number embedded in the
    /// type label (`uint16_t` is 16 bits).
    pub fn declared(
        type_label: &str,
        name: &str,
        location: Offset,
        annotation: &str,
        pointer_width_bits: u32,
    ) -> Result<Self, LayoutError> {
        let width_bits = if type_label.contains(POINTER_MARKER) || name.contains(POINTER_MARKER) {
            pointer_width_bits
        } else {
            let digits = embedded_digits(type_label)
                .ok_or_else(|| LayoutError::malformed(type_label, "no width digits in type"))?;
            parse_decimal(digits)?
        };

        let mut member = Self::field(width_bits, type_label, name, location)?;
        member.annotation = annotation.to_string();
        Ok(member)
    }

    /// Builds `gap_bytes` of padding at `location`. The gap must fit a `u32` bit width.
    pub fn padding(location: Offset, gap_bytes: u64, type_label: &str, prefix: &str) -> Result<Self, LayoutError> {
        let name = format!("{}{:X}[0x{:X}]", prefix, location.as_u64(), gap_bytes);
        let width_bits = gap_bytes
            .checked_mul(8)
            .and_then(|bits| u32::try_from(bits).ok())
            .ok_or_else(|| LayoutError::PaddingTooWide {
                location: location.as_u64(),
                bytes: gap_bytes,
            })?;
        checked_end(&name, location, gap_bytes)?;
        Ok(Self {
            kind: MemberKind::Padding,
            width_bits,
            type_label: type_label.to_string(),
            name,
            location,
            annotation: String::new(),
            conflicts: Vec::new(),
        })
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    pub fn is_padding(&self) -> bool {
        self.kind == MemberKind::Padding
    }

    pub fn width_bits(&self) -> u32 {
        self.width_bits
    }

    pub fn byte_width(&self) -> u64 {
        u64::from(self.width_bits / 8)
    }

    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Offset {
        self.location
    }

    /// First byte past the member. Construction guarantees this does not overflow.
    pub fn end(&self) -> u64 {
        self.location.as_u64() + self.byte_width()
    }

    pub fn annotation(&self) -> &str {
        &self.annotation
    }

    /// Widths of competing members dropped in favour of this one.
    pub fn conflicts(&self) -> &[u32] {
        &self.conflicts
    }

    pub fn record_conflict(&mut self, width_bits: u32) {
        self.conflicts.push(width_bits);
    }

    /// Annotation plus any conflict marker, exactly as written after `loc=`.
    pub fn trailing_text(&self) -> String {
        if self.conflicts.is_empty() {
            return self.annotation.clone();
        }
        let widths: Vec<String> = self.conflicts.iter().map(|w| format!("u{}", w)).collect();
        format!("{} CONFLICT {}", self.annotation, widths.join(" "))
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @ {}", self.type_label, self.name, self.location)
    }
}

fn validate_width(label: &str, width_bits: u32) -> Result<(), LayoutError> {
    if width_bits == 0 || width_bits % 8 != 0 {
        return Err(LayoutError::InvalidWidth {
            label: label.to_string(),
            width: width_bits,
        });
    }
    Ok(())
}

fn checked_end(name: &str, location: Offset, bytes: u64) -> Result<u64, LayoutError> {
    location
        .as_u64()
        .checked_add(bytes)
        .ok_or_else(|| LayoutError::EndOverflow {
            member: name.to_string(),
            location: location.as_u64(),
            bytes,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_width_from_type() {
        let member = Member::declared("uint16_t", "flags", Offset::new(4), "", 32).unwrap();
        assert_eq!(member.width_bits(), 16);
        assert_eq!(member.end(), 6);
        assert_eq!(member.kind(), MemberKind::Field);
    }

    #[test]
    fn test_pointer_marker_forces_pointer_width() {
        let by_type = Member::declared("Banana*", "b", Offset::new(8), "", 32).unwrap();
        let by_name = Member::declared("Banana", "*b", Offset::new(8), "", 64).unwrap();
        assert_eq!(by_type.width_bits(), 32);
        assert_eq!(by_name.width_bits(), 64);
    }

    #[test]
    fn test_declared_without_digits_is_malformed() {
        let err = Member::declared("Banana", "b", Offset::zero(), "", 32).unwrap_err();
        assert!(matches!(err, LayoutError::MalformedLiteral { .. }));
    }

    #[test]
    fn test_invalid_width_rejected() {
        assert!(matches!(
            Member::field(0, "uint0_t", "x", Offset::zero()),
            Err(LayoutError::InvalidWidth { width: 0, .. })
        ));
        assert!(Member::declared("uint12_t", "x", Offset::zero(), "", 32).is_err());
    }

    #[test]
    fn test_padding_name_and_width() {
        let pad = Member::padding(Offset::new(0x1), 0x3, "uint8_t", "pad_").unwrap();
        assert!(pad.is_padding());
        assert_eq!(pad.name(), "pad_1[0x3]");
        assert_eq!(pad.width_bits(), 24);
        assert_eq!(pad.end(), 4);
    }

    #[test]
    fn test_end_past_address_space_rejected() {
        let err = Member::field(32, "uint32_t", "unk_FF", Offset::new(u64::MAX)).unwrap_err();
        assert!(matches!(err, LayoutError::EndOverflow { bytes: 4, .. }));
        assert!(Member::field(8, "uint8_t", "last", Offset::new(u64::MAX - 1)).is_ok());
    }

    #[test]
    fn test_padding_wider_than_bit_width_rejected() {
        let pad = Member::padding(Offset::new(1), 0x1FFF_FFFF, "uint8_t", "pad_").unwrap();
        assert_eq!(pad.width_bits(), 0xFFFF_FFF8);

        let err = Member::padding(Offset::new(1), 0x2000_0000, "uint8_t", "pad_").unwrap_err();
        assert!(matches!(err, LayoutError::PaddingTooWide { location: 1, bytes: 0x2000_0000 }));
        assert!(Member::padding(Offset::new(1), 1 << 61, "uint8_t", "pad_").is_err());
    }

    #[test]
    fn test_trailing_text_with_conflicts() {
        let mut member = Member::field(8, "uint8_t", "unk_10", Offset::new(0x10)).unwrap();
        assert_eq!(member.trailing_text(), "");
        member.record_conflict(16);
        member.record_conflict(32);
        assert_eq!(member.trailing_text(), " CONFLICT u16 u32");
    }
}
