// Wed Jan 15 2026 - Alex

pub mod args;
pub mod handler;

pub use args::{Args, Command, LayoutArgs};
pub use handler::CommandHandler;

use clap::Parser;

pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    CommandHandler::new().execute(args)
}
