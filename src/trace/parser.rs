// Tue Jan 13 2026 - Alex

//! Reader for memory-access trace output.
//!
//! The first line carries metadata (`name=<ident>`, `size=<hex>`). Each
//! following line is either noise or a list of access pairs:
//!
//! ```text
//! <funcAddr>::<accessAddr> u<width>(<baseExpr>), <funcAddr>::<accessAddr> u<width>(<baseExpr>) ...
//! ```

use crate::parsing::{metadata_value, parse_decimal, parse_hex, tokenize};
use crate::structure::{LayoutError, Size};
use crate::trace::{AccessFact, ResolvedOffset};
use regex::Regex;

const ACCESS_PATTERN: &str = r"^u(\d+)\((.*)\)$";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceMetadata {
    pub name: Option<String>,
    pub declared_size: Size,
}

impl TraceMetadata {
    pub fn parse(line: &str) -> Result<Self, LayoutError> {
        let mut metadata = Self::default();
        for token in tokenize(line) {
            if let Some(name) = metadata_value(token, "name") {
                metadata.name = Some(name.to_string());
            } else if let Some(size) = metadata_value(token, "size") {
                metadata.declared_size = Size::new(parse_hex(size)?);
            }
        }
        Ok(metadata)
    }
}

pub struct TraceParser {
    metadata: TraceMetadata,
    access_pattern: Regex,
    facts: Vec<AccessFact>,
}

impl TraceParser {
    pub fn new(metadata: TraceMetadata) -> Result<Self, LayoutError> {
        Ok(Self {
            metadata,
            access_pattern: Regex::new(ACCESS_PATTERN)?,
            facts: Vec::new(),
        })
    }

    /// Parses a whole trace document; the first line is always metadata.
    pub fn parse_str(text: &str) -> Result<Self, LayoutError> {
        let mut lines = text.lines();
        let metadata = TraceMetadata::parse(lines.next().unwrap_or(""))
            .map_err(|e| e.at_line(1))?;

        let mut parser = Self::new(metadata)?;
        for (idx, line) in lines.enumerate() {
            parser.parse_line(line).map_err(|e| e.at_line(idx + 2))?;
        }
        Ok(parser)
    }

    /// Returns how many facts the line contributed.
    pub fn parse_line(&mut self, line: &str) -> Result<usize, LayoutError> {
        let tokens = tokenize(line);
        let Some(first) = tokens.first() else {
            return Ok(0);
        };
        if !first.contains("::") || tokens.len() % 2 != 0 {
            log::debug!("skipping non-entry line: {:?}", line);
            return Ok(0);
        }

        for pair in tokens.chunks_exact(2) {
            let fact = self.parse_entry(pair[0], pair[1])?;
            self.facts.push(fact);
        }
        Ok(tokens.len() / 2)
    }

    fn parse_entry(&self, addresses: &str, access: &str) -> Result<AccessFact, LayoutError> {
        let (site, access_address) = addresses
            .split_once("::")
            .ok_or_else(|| LayoutError::malformed(addresses, "expected <funcAddr>::<accessAddr>"))?;
        let access_address = parse_hex(access_address)?;

        let caps = self
            .access_pattern
            .captures(access)
            .ok_or_else(|| LayoutError::malformed(access, "expected u<width>(<base>)"))?;
        let width = parse_decimal(&caps[1])?;
        let offset = ResolvedOffset::parse(&caps[2])?;

        AccessFact::new(site, access_address, width, offset)
    }

    pub fn metadata(&self) -> &TraceMetadata {
        &self.metadata
    }

    pub fn facts(&self) -> &[AccessFact] {
        &self.facts
    }

    pub fn into_parts(self) -> (TraceMetadata, Vec<AccessFact>) {
        (self.metadata, self.facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::Offset;

    fn parser() -> TraceParser {
        TraceParser::new(TraceMetadata::default()).unwrap()
    }

    #[test]
    fn test_metadata_any_order() {
        let meta = TraceMetadata::parse("size=0x1B0,\tname=Player").unwrap();
        assert_eq!(meta.name.as_deref(), Some("Player"));
        assert_eq!(meta.declared_size, Size::new(0x1b0));

        let meta = TraceMetadata::parse("name=FOO").unwrap();
        assert!(!meta.declared_size.is_known());
    }

    #[test]
    fn test_metadata_bad_size() {
        assert!(matches!(
            TraceMetadata::parse("name=FOO size=big"),
            Err(LayoutError::MalformedLiteral { .. })
        ));
    }

    #[test]
    fn test_parse_entry_line() {
        let mut parser = parser();
        let count = parser.parse_line("AAAA::1000 u8(0), BBBB::1004 u32(4)").unwrap();
        assert_eq!(count, 2);

        let facts = parser.facts();
        assert_eq!(facts[0].function_site(), "AAAA");
        assert_eq!(facts[0].access_address(), 0x1000);
        assert_eq!(facts[0].width_bits(), 8);
        assert_eq!(facts[1].offset(), ResolvedOffset::Resolved(Offset::new(4)));
    }

    #[test]
    fn test_base_expressions() {
        let mut parser = parser();
        parser.parse_line("0800A1C4::03001234 u16(3001230+4) 0800A1C8::03001238 u8(?+8)").unwrap();
        assert_eq!(parser.facts()[0].offset(), ResolvedOffset::Resolved(Offset::new(0x3001234)));
        assert_eq!(parser.facts()[1].offset(), ResolvedOffset::Unresolved { delta: 8 });
    }

    #[test]
    fn test_noise_lines_are_skipped() {
        let mut parser = parser();
        for line in ["", "   ", "-- trace started --", "AAAA::1000 u8(0) BBBB::1004", "hello world"] {
            assert_eq!(parser.parse_line(line).unwrap(), 0, "{:?}", line);
        }
        assert!(parser.facts().is_empty());
    }

    #[test]
    fn test_malformed_pair_fails() {
        let cases = [
            "AAAA::1000 u8(0) BBBB-1004 u8(4)",
            "::1000 u8(0)",
            "AAAA::zz u8(0)",
            "AAAA::1000 s8(0)",
            "AAAA::1000 u8(xyz)",
        ];
        for line in cases {
            let err = parser().parse_line(line).unwrap_err();
            assert!(matches!(err, LayoutError::MalformedLiteral { .. }), "{:?}", line);
        }
    }

    #[test]
    fn test_parse_str_reports_line() {
        let err = TraceParser::parse_str("name=FOO size=8\nnoise\nAAAA::1000 u8(zz)\n").err().unwrap();
        assert!(matches!(err, LayoutError::Line { line: 3, .. }));
    }
}
