use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "EXTRACT";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Layout
    #[serde(default)]
    root: Option<PathBuf>,
    pub input_dir: String,

    // Matching
    pub extension: String,

    // Output
    pub output_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: None,
            input_dir: "Requirements".to_string(),
            extension: "docx".to_string(),
            output_prefix: "_extracted_".to_string(),
        }
    }
}

impl Config {
    /// Directory the tool is installed in. Defaults to the crate root as
    /// recorded at build time, so a binary copied to another machine must
    /// set `EXTRACT_ROOT` (or `root` in the config file) to find its input.
    pub fn root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")))
    }

    pub fn requirements_dir(&self) -> PathBuf {
        self.root().join(&self.input_dir)
    }

    /// `_extracted_<stem>.txt` for the default prefix.
    pub fn output_name(&self, stem: &str) -> String {
        format!("{}{}.txt", self.output_prefix, stem)
    }
}

pub fn read_config() -> anyhow::Result<Config> {
    build(config::Environment::with_prefix(ENV_PREFIX))
}

fn build<S>(env: S) -> anyhow::Result<Config>
where
    S: config::Source + Send + Sync + 'static,
{
    let defaults = Config::default();
    config::Config::builder()
        .set_default("input_dir", defaults.input_dir)?
        .set_default("extension", defaults.extension)?
        .set_default("output_prefix", defaults.output_prefix)?
        .add_source(config::File::with_name("config").required(false))
        .add_source(env)
        .build()?
        .try_deserialize::<Config>()
        .with_context(|| "Invalid configuration")
}
