// Tue Jan 15 2026 - Alex

pub mod config;
pub mod output;
pub mod parsing;
pub mod pipeline;
pub mod structure;
pub mod trace;
pub mod ui;

pub use config::LayoutConfig;
pub use output::{JsonExporter, OutputFormat, TemplateRenderer};
pub use pipeline::{infer_from_trace, repad_definition, PipelineOutput};
pub use structure::{LayoutEngine, LayoutError, LayoutOutcome, LayoutWarning, Member, StructureTemplate};
pub use trace::{AccessFact, CandidateBuilder, TraceParser};
