// Wed Jan 15 2026 - Alex

use super::args::{Args, Command, LayoutArgs};
use crate::config::LayoutConfig;
use crate::pipeline::{self, PipelineOutput};
use crate::ui::{print_info, print_success, print_warning};
use anyhow::Context;
use std::fs;
use std::io::{self, Read, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Trace,
    Repad,
}

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args)?;

        if args.no_color {
            colored::control::set_override(false);
        }

        let config = self.load_config(&args)?;

        match &args.command {
            Command::Trace(layout_args) => self.handle_layout(layout_args, &config, Mode::Trace, args.quiet),
            Command::Repad(layout_args) => self.handle_layout(layout_args, &config, Mode::Repad, args.quiet),
        }
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Warn,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .init();

        Ok(())
    }

    fn load_config(&self, args: &Args) -> anyhow::Result<LayoutConfig> {
        let mut config = match &args.config {
            Some(path) => LayoutConfig::load(path)
                .with_context(|| format!("load config file {:?}", path))?,
            None => LayoutConfig::default(),
        };

        if let Some(bits) = args.pointer_width {
            config = config.with_pointer_width(bits);
        }
        config.validate()?;

        Ok(config)
    }

    fn handle_layout(&self, args: &LayoutArgs, config: &LayoutConfig, mode: Mode, quiet: bool) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let text = self.read_input(args)?;
        let result: PipelineOutput = match mode {
            Mode::Trace => pipeline::infer_from_trace(&text, config),
            Mode::Repad => pipeline::repad_definition(&text, config),
        }
        .with_context(|| format!("process {:?}", args.input))?;

        let template = &result.outcome.template;
        if !quiet {
            print_info(&format!(
                "{}: {} field(s), {} padding member(s)",
                template.name(),
                template.fields().count(),
                template.padding().count()
            ));
            for warning in &result.outcome.warnings {
                print_warning(&warning.to_string());
            }
        }

        let rendered = result.render(args.format)?;
        match &args.output {
            Some(path) => {
                fs::write(path, rendered).with_context(|| format!("write output file {:?}", path))?;
                if !quiet {
                    print_success(&format!("Output written to: {:?}", path));
                }
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }

    fn read_input(&self, args: &LayoutArgs) -> anyhow::Result<String> {
        if args.reads_stdin() {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("read stdin")?;
            return Ok(text);
        }
        fs::read_to_string(&args.input).with_context(|| format!("read input file {:?}", args.input))
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
