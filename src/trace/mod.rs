// Tue Jan 13 2026 - Alex

pub mod candidate;
pub mod fact;
pub mod parser;

pub use candidate::CandidateBuilder;
pub use fact::{AccessFact, ResolvedOffset};
pub use parser::{TraceMetadata, TraceParser};
