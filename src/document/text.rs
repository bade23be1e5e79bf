use super::{DocumentContent, ExtractedText, TableText};

pub const CELL_DELIMITER: &str = " | ";

/// One line per non-blank paragraph, then one line per table row that has
/// at least one non-blank cell. The joined block is trimmed and terminated
/// by a single newline.
pub fn flatten(content: &DocumentContent) -> ExtractedText {
    let mut lines: Vec<String> = content
        .paragraphs
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    for table in &content.tables {
        lines.extend(table_lines(table));
    }

    let mut text = lines.join("\n").trim().to_string();
    text.push('\n');
    ExtractedText(text)
}

fn table_lines(table: &TableText) -> impl Iterator<Item = String> + '_ {
    table.rows.iter().filter_map(|row| {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| cell.trim().replace('\n', " "))
            .collect();
        cells
            .iter()
            .any(|cell| !cell.is_empty())
            .then(|| cells.join(CELL_DELIMITER))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(texts: &[&str]) -> DocumentContent {
        DocumentContent {
            paragraphs: texts.iter().map(|t| t.to_string()).collect(),
            tables: Vec::new(),
        }
    }

    fn table(rows: &[&[&str]]) -> TableText {
        TableText::new(
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(flatten(&DocumentContent::default()).as_str(), "\n");
    }

    #[test]
    fn test_whitespace_paragraph_only() {
        assert_eq!(flatten(&paragraphs(&[" \t "])).as_str(), "\n");
    }

    #[test]
    fn test_blank_paragraphs_skipped() {
        let text = flatten(&paragraphs(&["Hello", "", "  ", "World"]));
        assert_eq!(text.as_str(), "Hello\nWorld\n");
    }

    #[test]
    fn test_paragraphs_trimmed() {
        let text = flatten(&paragraphs(&["  REQ-1 Login  ", "\tREQ-2 Logout\n"]));
        assert_eq!(text.as_str(), "REQ-1 Login\nREQ-2 Logout\n");
    }

    #[test]
    fn test_table_rows() {
        let content = DocumentContent {
            paragraphs: Vec::new(),
            tables: vec![table(&[&["a", "b"], &["", ""], &["c", "\nd"]])],
        };
        let text = flatten(&content);
        assert_eq!(text.as_str(), "a | b\nc | d\n");
    }

    #[test]
    fn test_cell_newlines_flattened() {
        let content = DocumentContent {
            paragraphs: vec!["Intro".to_string()],
            tables: vec![table(&[&[" id ", "line one\nline two"], &["  ", "\n"]])],
        };
        assert_eq!(flatten(&content).as_str(), "Intro\nid | line one line two\n");
    }

    #[test]
    fn test_row_with_leading_empty_cell() {
        let content = DocumentContent {
            paragraphs: vec!["Header".to_string()],
            tables: vec![table(&[&["", "x"], &["y", ""]])],
        };
        // Only the outer edges of the whole block are trimmed.
        assert_eq!(flatten(&content).as_str(), "Header\n | x\ny |\n");
    }

    #[test]
    fn test_block_edges_trimmed() {
        let content = DocumentContent {
            paragraphs: Vec::new(),
            tables: vec![table(&[&["", "x"]])],
        };
        assert_eq!(flatten(&content).as_str(), "| x\n");
    }

    #[test]
    fn test_tables_after_paragraphs() {
        let content = DocumentContent {
            paragraphs: vec!["p1".to_string(), "p2".to_string()],
            tables: vec![table(&[&["t1"]]), table(&[&["t2", "t3"]])],
        };
        assert_eq!(flatten(&content).as_str(), "p1\np2\nt1\nt2 | t3\n");
    }
}
