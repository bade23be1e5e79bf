pub mod docx;
pub mod text;

use std::fmt;
use std::path::Path;

use crate::error::Result;

/// Text pulled out of a document, still in document order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocumentContent {
    pub paragraphs: Vec<String>,
    pub tables: Vec<TableText>,
}

/// Rows of cells, each cell holding its raw (untrimmed) text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TableText {
    pub rows: Vec<Vec<String>>,
}

impl TableText {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

/// Flattened output of one document. Always ends with exactly one newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters, as reported after each write.
    pub fn len_chars(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn extract_text(path: &Path) -> Result<ExtractedText> {
    let content = docx::read(path)?;
    Ok(text::flatten(&content))
}
