// Wed Jan 15 2026 - Alex

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "struct-template-generator")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Infers padded C structure templates from memory-access traces", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,

    /// JSON layout configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides the pointer width from the configuration.
    #[arg(long, global = true)]
    pub pointer_width: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a structure template from an access trace.
    Trace(LayoutArgs),
    /// Re-pad an annotated structure definition.
    Repad(LayoutArgs),
}

#[derive(Parser, Debug)]
pub struct LayoutArgs {
    /// Input file, or `-` for stdin.
    #[arg(short, long)]
    pub input: PathBuf,

    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl LayoutArgs {
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new("-")
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.reads_stdin() && !self.input.exists() {
            return Err(format!("Input file does not exist: {:?}", self.input));
        }
        if self.output.as_deref() == Some(self.input.as_path()) {
            return Err("Output must not overwrite the input file".to_string());
        }
        Ok(())
    }
}
