// Wed Jan 15 2026 - Alex

//! End-to-end flows: trace text or definition text in, finished template out.

use crate::config::LayoutConfig;
use crate::output::{JsonExporter, OutputFormat, TemplateRenderer};
use crate::structure::{DefinitionParser, LayoutEngine, LayoutError, LayoutOutcome, TemplateValidator};
use crate::trace::{CandidateBuilder, TraceParser};

/// A validated layout paired with the renderer configured for its source.
pub struct PipelineOutput {
    pub outcome: LayoutOutcome,
    pub renderer: TemplateRenderer,
}

impl PipelineOutput {
    pub fn render(&self, format: OutputFormat) -> Result<String, LayoutError> {
        match format {
            OutputFormat::Text => Ok(self.renderer.render(&self.outcome.template)),
            OutputFormat::Json => JsonExporter::new().export(&self.outcome),
        }
    }
}

pub fn infer_from_trace(text: &str, config: &LayoutConfig) -> Result<PipelineOutput, LayoutError> {
    config.validate()?;

    let (metadata, facts) = TraceParser::parse_str(text)?.into_parts();
    log::info!("parsed {} access fact(s)", facts.len());

    let candidates = CandidateBuilder::new().build(&facts)?;
    let name = metadata
        .name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| config.default_struct_name.clone());

    let outcome = LayoutEngine::new(config).build(name, metadata.declared_size, candidates)?;
    TemplateValidator::new().validate(&outcome.template)?;

    Ok(PipelineOutput {
        outcome,
        renderer: TemplateRenderer::new(config.comment_column),
    })
}

pub fn repad_definition(text: &str, config: &LayoutConfig) -> Result<PipelineOutput, LayoutError> {
    config.validate()?;

    let parsed = DefinitionParser::parse_str(config, text)?;
    log::info!("parsed {} declared member(s)", parsed.members.len());

    let name = parsed
        .name
        .unwrap_or_else(|| config.default_struct_name.clone());

    let outcome = LayoutEngine::new(config).build(name, parsed.declared_size, parsed.members)?;
    TemplateValidator::new().validate(&outcome.template)?;

    Ok(PipelineOutput {
        outcome,
        renderer: TemplateRenderer::new(parsed.comment_column),
    })
}
