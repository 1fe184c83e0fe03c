// Tue Jan 13 2026 - Alex

//! Line tokenizing and literal parsing shared by the trace and definition readers.
//!
//! Blank or unrelated lines simply yield no tokens. Numeric literals are strict:
//! anything that is not a clean hex or decimal number is a `MalformedLiteral`.

use crate::structure::LayoutError;

/// A token together with its byte span in the source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
}

impl<'a> Token<'a> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Splits on whitespace and commas, dropping empty tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect()
}

/// Splits on whitespace only, keeping each token's position in `line`.
pub fn tokenize_spans(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (idx, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(Token { text: &line[s..idx], start: s });
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(Token { text: &line[s..], start: s });
    }

    tokens
}

/// Returns the value of a `key=value` token when the key matches.
pub fn metadata_value<'a>(token: &'a str, key: &str) -> Option<&'a str> {
    token.strip_prefix(key)?.strip_prefix('=')
}

/// Parses a hexadecimal literal with an optional `0x`/`0X` prefix.
pub fn parse_hex(literal: &str) -> Result<u64, LayoutError> {
    let digits = literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
        .unwrap_or(literal);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(LayoutError::malformed(literal, "expected hex digits"));
    }
    u64::from_str_radix(digits, 16)
        .map_err(|e| LayoutError::malformed(literal, format!("hex literal out of range: {}", e)))
}

pub fn parse_decimal(literal: &str) -> Result<u32, LayoutError> {
    if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LayoutError::malformed(literal, "expected decimal digits"));
    }
    literal
        .parse::<u32>()
        .map_err(|e| LayoutError::malformed(literal, format!("invalid decimal literal: {}", e)))
}

/// First run of ASCII digits inside `label`, e.g. `"32"` in `"uint32_t"`.
pub fn embedded_digits(label: &str) -> Option<&str> {
    let start = label.find(|c: char| c.is_ascii_digit())?;
    let rest = &label[start..];
    let len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    Some(&rest[..len])
}
