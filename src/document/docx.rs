use std::path::Path;
use std::{fs::File, io::Read};

use docx_rs::{
    read_docx, Break, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCell,
    TableCellContent, TableChild, TableRowChild,
};
use serde_json::Value;

use super::{DocumentContent, TableText};
use crate::error::{ExtractError, Result};

/// Opens the container at `path` and copies out body paragraphs and tables.
/// The parsed document is dropped before returning.
pub fn read(path: &Path) -> Result<DocumentContent> {
    let mut file = File::open(path).map_err(|e| ExtractError::io(path, e))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| ExtractError::io(path, e))?;

    let document = read_docx(&buffer).map_err(|source| ExtractError::DocumentFormat {
        path: path.to_path_buf(),
        source,
    })?;

    let mut content = DocumentContent::default();
    for child in &document.document.children {
        match child {
            DocumentChild::Paragraph(p) => content.paragraphs.push(paragraph_text(p)),
            DocumentChild::Table(t) => content.tables.push(table_text(t)),
            _ => {}
        }
    }

    log::trace!(
        "{}: {} paragraphs, {} tables",
        path.display(),
        content.paragraphs.len(),
        content.tables.len()
    );
    Ok(content)
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_paragraph_children(&paragraph.children, &mut text);
    text
}

// Direct runs plus runs nested in hyperlinks; tracked insertions and
// other wrappers are not part of the visible paragraph text.
fn push_paragraph_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, text),
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, text),
            _ => {}
        }
    }
}

fn push_run(run: &Run, text: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) | RunChild::PTab(_) => text.push('\t'),
            RunChild::Break(br) if is_line_break(br) => text.push('\n'),
            RunChild::CarriageReturn(_) => text.push('\n'),
            _ => {}
        }
    }
}

/// Only text-wrapping breaks produce a newline; page and column breaks
/// contribute nothing. The break type is private, so it is read back
/// through the serialized form.
fn is_line_break(br: &Break) -> bool {
    serde_json::to_value(br)
        .ok()
        .and_then(|value| {
            value
                .get("breakType")
                .and_then(Value::as_str)
                .map(|kind| kind.eq_ignore_ascii_case("textWrapping"))
        })
        .unwrap_or(true)
}

// Unwraps `{"val": x}` shaped properties.
fn property_val(value: &Value) -> &Value {
    match value {
        Value::Object(map) => map.get("val").unwrap_or(&Value::Null),
        other => other,
    }
}

/// Grid columns covered by the cell, and whether it continues a vertical
/// merge from the row above.
fn cell_merge(cell: &TableCell) -> (usize, bool) {
    let property = serde_json::to_value(&cell.property).unwrap_or_default();
    let span = property
        .get("gridSpan")
        .map(property_val)
        .and_then(Value::as_u64)
        .map_or(1, |n| n.max(1) as usize);
    let continues = property
        .get("verticalMerge")
        .map(property_val)
        .and_then(Value::as_str)
        .is_some_and(|kind| kind.eq_ignore_ascii_case("continue"));
    (span, continues)
}

/// One entry per grid column: a spanning cell repeats across its columns
/// and a vertically continued cell takes the text of the cell above it.
// Rows and cells are single-variant wrappers in the collaborator's model.
#[allow(irrefutable_let_patterns)]
fn table_text(table: &Table) -> TableText {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(table.rows.len());
    for child in &table.rows {
        if let TableChild::TableRow(row) = child {
            let mut cells: Vec<String> = Vec::with_capacity(row.cells.len());
            for cell in &row.cells {
                if let TableRowChild::TableCell(cell) = cell {
                    let (span, continues) = cell_merge(cell);
                    let above = rows.last().and_then(|prev| prev.get(cells.len()));
                    let text = match above {
                        Some(above) if continues => above.clone(),
                        _ => cell_text(cell),
                    };
                    cells.extend(std::iter::repeat(text).take(span));
                }
            }
            rows.push(cells);
        }
    }
    TableText::new(rows)
}

/// Paragraphs of the cell joined by newlines. Nested tables are skipped.
fn cell_text(cell: &TableCell) -> String {
    cell.children
        .iter()
        .filter_map(|content| match content {
            TableCellContent::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
