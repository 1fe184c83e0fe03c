// Wed Jan 15 2026 - Alex

//! Reader for already-annotated structure definitions.
//!
//! Recognized lines:
//! - `<type> <name>; // loc=0x<location> [annotation]` declares a member
//! - `// size=0x<size>` sets the declared size
//! - `}<name>;` names the structure
//!
//! Existing padding is skipped so it can be regenerated from the real members.

use crate::config::LayoutConfig;
use crate::parsing::{metadata_value, parse_hex, tokenize_spans};
use crate::structure::{LayoutError, Member, Offset, Size};

#[derive(Debug, Clone, Default)]
pub struct ParsedDefinition {
    pub name: Option<String>,
    pub declared_size: Size,
    pub members: Vec<Member>,
    /// Largest char column at which `//` appeared in the input.
    pub comment_column: usize,
}

pub struct DefinitionParser<'a> {
    config: &'a LayoutConfig,
    parsed: ParsedDefinition,
}

impl<'a> DefinitionParser<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self {
            config,
            parsed: ParsedDefinition::default(),
        }
    }

    pub fn parse_str(config: &'a LayoutConfig, text: &str) -> Result<ParsedDefinition, LayoutError> {
        let mut parser = Self::new(config);
        for (lineno, line) in text.lines().enumerate() {
            parser.parse_line(line).map_err(|e| e.at_line(lineno + 1))?;
        }
        Ok(parser.finish())
    }

    pub fn parse_line(&mut self, line: &str) -> Result<(), LayoutError> {
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(index) = line.find("//") {
            let column = line[..index].chars().count();
            self.parsed.comment_column = self.parsed.comment_column.max(column);
        }

        let tokens = tokenize_spans(line);
        match tokens.len() {
            1 => {
                if let Some(name) = closing_name(tokens[0].text) {
                    self.parsed.name = Some(name.to_string());
                }
            }
            2 => {
                if let Some(value) = metadata_value(tokens[1].text, "size") {
                    self.parsed.declared_size = Size::new(parse_hex(value)?);
                }
            }
            n if n >= 4 => {
                let Some(location) = metadata_value(tokens[3].text, "loc") else {
                    return Ok(());
                };
                let name = tokens[1].text.trim_end_matches(';');
                if name.starts_with(&self.config.padding_prefix) {
                    log::debug!("skipping stale padding {}", name);
                    return Ok(());
                }

                let location = Offset::new(parse_hex(location)?);
                let annotation = &line[tokens[3].end()..];
                let member = Member::declared(
                    tokens[0].text,
                    name,
                    location,
                    annotation,
                    self.config.pointer_width_bits,
                )?;
                log::debug!("parsed member {}", member);
                self.parsed.members.push(member);
            }
            _ => {}
        }

        Ok(())
    }

    pub fn finish(self) -> ParsedDefinition {
        self.parsed
    }
}

fn closing_name(token: &str) -> Option<&str> {
    let name = token.strip_prefix('}')?.strip_suffix(';')?;
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "typedef struct{\n\
        \tuint8_t unk_00;     // loc=0x0\n\
        \t\tuint8_t pad_1[0x3]; // loc=0x1\n\
        \tBanana *b;          // loc=0x4 points at the fruit\n\
        \tuint16_t flags;     // loc=0xA\n\
        \t// size=0x10\n\
        }Basket;\n";

    #[test]
    fn test_parse_definition() {
        let config = LayoutConfig::default();
        let parsed = DefinitionParser::parse_str(&config, INPUT).unwrap();

        assert_eq!(parsed.name.as_deref(), Some("Basket"));
        assert_eq!(parsed.declared_size, Size::new(0x10));
        assert_eq!(parsed.members.len(), 3);

        let pointer = &parsed.members[1];
        assert_eq!(pointer.name(), "*b");
        assert_eq!(pointer.width_bits(), 32);
        assert_eq!(pointer.annotation(), " points at the fruit");
        assert_eq!(parsed.members[2].location(), Offset::new(0xA));
    }

    #[test]
    fn test_comment_column_is_tracked() {
        let config = LayoutConfig::default();
        let parsed = DefinitionParser::parse_str(&config, INPUT).unwrap();
        assert_eq!(parsed.comment_column, "\t\tuint8_t pad_1[0x3]; ".len());
    }

    #[test]
    fn test_unrelated_lines_are_ignored() {
        let config = LayoutConfig::default();
        let parsed = DefinitionParser::parse_str(&config, "\n// some note here\nint x;\nfoo bar baz qux\n").unwrap();
        assert!(parsed.members.is_empty());
        assert!(parsed.name.is_none());
        assert!(!parsed.declared_size.is_known());
    }

    #[test]
    fn test_bad_location_is_malformed() {
        let config = LayoutConfig::default();
        let err = DefinitionParser::parse_str(&config, "uint8_t a; // loc=0xZZ\n").unwrap_err();
        assert!(matches!(err, LayoutError::Line { line: 1, .. }));
        assert!(matches!(err.root(), LayoutError::MalformedLiteral { .. }));
    }

    #[test]
    fn test_type_without_width_is_malformed() {
        let config = LayoutConfig::default();
        let err = DefinitionParser::parse_str(&config, "Banana b; // loc=0x0\n").unwrap_err();
        assert!(matches!(err.root(), LayoutError::MalformedLiteral { .. }));
    }

    #[test]
    fn test_comment_column_counts_chars() {
        let config = LayoutConfig::default();
        let parsed = DefinitionParser::parse_str(&config, "\tuint8_t café;  // loc=0x0\n").unwrap();
        assert_eq!(parsed.comment_column, 16);
    }
}
