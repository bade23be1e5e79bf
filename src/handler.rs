use clap::Parser;

use crate::config::Config;

pub mod batch;

/// Takes no arguments; parsing only answers `--help` and `--version`.
#[derive(Parser)]
#[command(name = "extract_docx_text")]
#[command(
    about = "Extract paragraph and table text from every .docx in the Requirements folder",
    version
)]
pub struct Cli {}

pub fn handler(config: Config) -> anyhow::Result<()> {
    batch::run(&config)?;
    Ok(())
}
