// Tue Jan 13 2026 - Alex

pub mod json;
pub mod renderer;

pub use json::JsonExporter;
pub use renderer::TemplateRenderer;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
