// Tue Jan 13 2026 - Alex

use crate::structure::Offset;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Malformed literal {literal:?}: {reason}")]
    MalformedLiteral { literal: String, reason: String },
    #[error("Invalid width {width} for {label}: must be a non-zero multiple of 8 bits")]
    InvalidWidth { label: String, width: u32 },
    #[error("Overlapping members: {member} ends at 0x{end:X} but {next} starts at 0x{next_location:X}")]
    OverlapInvariantViolated {
        member: String,
        end: u64,
        next: String,
        next_location: u64,
    },
    #[error("Member {member} ends at 0x{end:X}, past the declared size 0x{declared_size:X}")]
    MemberOutOfBounds {
        member: String,
        end: u64,
        declared_size: u64,
    },
    #[error("Member {member} at 0x{location:X} with 0x{bytes:X} byte(s) ends past the 64-bit address space")]
    EndOverflow { member: String, location: u64, bytes: u64 },
    #[error("Padding of 0x{bytes:X} byte(s) at 0x{location:X} exceeds the maximum member width")]
    PaddingTooWide { location: u64, bytes: u64 },
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<LayoutError>,
    },
}

impl LayoutError {
    pub fn malformed(literal: &str, reason: impl Into<String>) -> Self {
        Self::MalformedLiteral {
            literal: literal.to_string(),
            reason: reason.into(),
        }
    }

    pub fn at_line(self, line: usize) -> Self {
        Self::Line {
            line,
            source: Box::new(self),
        }
    }

    /// Strips any line-number wrapping and returns the underlying failure.
    pub fn root(&self) -> &LayoutError {
        match self {
            Self::Line { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Non-fatal outcomes reported alongside a finished layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutWarning {
    #[error("There are no entries to pad")]
    NoEntries,
    #[error("Conflict at {location}: kept u{kept}, also accessed as {}", join_widths(.dropped))]
    ConflictResolved {
        location: Offset,
        kept: u32,
        dropped: Vec<u32>,
    },
    #[error("Collapsed {count} duplicate member(s)")]
    DuplicatesCollapsed { count: usize },
}

fn join_widths(widths: &[u32]) -> String {
    widths
        .iter()
        .map(|w| format!("u{}", w))
        .collect::<Vec<_>>()
        .join(" ")
}
