use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::document::extract_text;
use crate::error::{ExtractError, Result};

/// Output of one processed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub output: PathBuf,
    pub chars: usize,
}

impl Written {
    pub fn file_name(&self) -> String {
        self.output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

pub fn run(config: &Config) -> Result<Vec<Written>> {
    let dir = config.requirements_dir();
    log::info!("Reading documents from {}", dir.display());
    run_in(&dir, config)
}

/// Extracts every matching document in `dir`, in file name order, stopping
/// at the first failure.
pub fn run_in(dir: &Path, config: &Config) -> Result<Vec<Written>> {
    if !dir.exists() {
        return Err(ExtractError::MissingDirectory(dir.to_path_buf()));
    }

    let inputs = find_documents(dir, &config.extension)?;
    if inputs.is_empty() {
        return Err(ExtractError::NoInputFiles {
            dir: dir.to_path_buf(),
            extension: config.extension.clone(),
        });
    }
    log::info!("Found {} documents", inputs.len());

    let mut written = Vec::with_capacity(inputs.len());
    for input in inputs {
        let entry = process_single_file(dir, &input, config)?;
        println!("Wrote {} (chars={})", entry.file_name(), entry.chars);
        written.push(entry);
    }
    Ok(written)
}

fn process_single_file(dir: &Path, input: &Path, config: &Config) -> Result<Written> {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    log::debug!("Extracting {}", input.display());

    let extracted = extract_text(input)?;
    let output = dir.join(config.output_name(&stem));
    let chars = extracted.len_chars();
    fs::write(&output, extracted.as_str()).map_err(|e| ExtractError::io(&output, e))?;

    Ok(Written { output, chars })
}

/// Files directly inside `dir` (symlinks resolved) whose extension equals
/// `extension` exactly, sorted by file name.
fn find_documents(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            documents.push(path.to_path_buf());
        }
    }
    Ok(documents)
}
