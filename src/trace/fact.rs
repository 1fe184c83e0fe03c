// Tue Jan 13 2026 - Alex

use crate::parsing::parse_hex;
use crate::structure::{LayoutError, Offset};
use std::fmt;

/// Where an access landed inside the traced structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedOffset {
    Resolved(Offset),
    /// The trace could not pin down the base address. `delta` is kept for
    /// diagnostics only and is never used as a location.
    Unresolved { delta: u64 },
}

impl ResolvedOffset {
    /// Parses the text inside `u<width>(...)`:
    /// `?+<delta>`, `<base>+<delta>` or `<offset>`, all hex.
    pub fn parse(expr: &str) -> Result<Self, LayoutError> {
        match expr.split_once('+') {
            Some(("?", delta)) => Ok(Self::Unresolved {
                delta: parse_hex(delta)?,
            }),
            Some((base, delta)) => {
                let offset = parse_hex(base)?
                    .checked_add(parse_hex(delta)?)
                    .ok_or_else(|| LayoutError::malformed(expr, "offset overflows"))?;
                Ok(Self::Resolved(Offset::new(offset)))
            }
            None => Ok(Self::Resolved(Offset::new(parse_hex(expr)?))),
        }
    }

    pub fn resolved(&self) -> Option<Offset> {
        match self {
            Self::Resolved(offset) => Some(*offset),
            Self::Unresolved { .. } => None,
        }
    }
}

impl fmt::Display for ResolvedOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(offset) => write!(f, "{}", offset),
            Self::Unresolved { delta } => write!(f, "?+0x{:X}", delta),
        }
    }
}

/// One observed memory access from a trace line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessFact {
    function_site: String,
    access_address: u64,
    width_bits: u32,
    offset: ResolvedOffset,
}

impl AccessFact {
    pub fn new(
        function_site: &str,
        access_address: u64,
        width_bits: u32,
        offset: ResolvedOffset,
    ) -> Result<Self, LayoutError> {
        if function_site.is_empty() {
            return Err(LayoutError::malformed(function_site, "missing function address"));
        }
        if width_bits == 0 {
            return Err(LayoutError::InvalidWidth {
                label: format!("u{}", width_bits),
                width: width_bits,
            });
        }
        Ok(Self {
            function_site: function_site.to_string(),
            access_address,
            width_bits,
            offset,
        })
    }

    pub fn function_site(&self) -> &str {
        &self.function_site
    }

    pub fn access_address(&self) -> u64 {
        self.access_address
    }

    pub fn width_bits(&self) -> u32 {
        self.width_bits
    }

    pub fn offset(&self) -> ResolvedOffset {
        self.offset
    }
}

impl fmt::Display for AccessFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{:X} u{}({})",
            self.function_site, self.access_address, self.width_bits, self.offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_offset() {
        assert_eq!(ResolvedOffset::parse("1C").unwrap(), ResolvedOffset::Resolved(Offset::new(0x1c)));
    }

    #[test]
    fn test_parse_base_plus_delta() {
        assert_eq!(ResolvedOffset::parse("10+4").unwrap(), ResolvedOffset::Resolved(Offset::new(0x14)));
    }

    #[test]
    fn test_parse_unresolved_base() {
        let offset = ResolvedOffset::parse("?+4").unwrap();
        assert_eq!(offset, ResolvedOffset::Unresolved { delta: 4 });
        assert_eq!(offset.resolved(), None);
        assert_eq!(offset.to_string(), "?+0x4");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "+4", "10+", "q", "?+"] {
            let err = ResolvedOffset::parse(bad).unwrap_err();
            assert!(matches!(err, LayoutError::MalformedLiteral { .. }), "{:?}", bad);
        }
    }

    #[test]
    fn test_fact_requires_site_and_width() {
        let offset = ResolvedOffset::Resolved(Offset::zero());
        assert!(AccessFact::new("", 0x1000, 8, offset).is_err());
        assert!(AccessFact::new("AAAA", 0x1000, 0, offset).is_err());

        let fact = AccessFact::new("AAAA", 0x1000, 8, offset).unwrap();
        assert_eq!(fact.to_string(), "AAAA::1000 u8(0x0)");
    }
}
