// Tue Jan 13 2026 - Alex

pub mod tokens;

pub use tokens::{embedded_digits, metadata_value, parse_decimal, parse_hex, tokenize, tokenize_spans, Token};
