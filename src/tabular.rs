/*!
 * CSV audit sheet export and revision sheet import.
 *
 * The audit sheet carries one row per translated text run; reviewers fill
 * the Revision column and send the sheet back. Cells are matched by header
 * name, and a sheet missing a required column is rejected outright rather
 * than silently producing empty fields.
 */

use std::mem::take;

use crate::errors::TabularError;
use crate::translation::entry_log::TranslationEntryLog;

/// Audit sheet column headers
pub const COL_FILE_NAME: &str = "File Name";
pub const COL_ELEMENT_CONTEXT: &str = "Element Context";
pub const COL_ORIGINAL_TEXT: &str = "Original Text";
pub const COL_TRANSLATED_TEXT: &str = "Translated Text";
pub const COL_REVISION: &str = "Revision";

const SEPARATOR: char = ',';

/// One row imported from a revision sheet.
///
/// A blank revision cell means the reviewer has not revised that row; the
/// index builder drops such rows.
#[derive(Debug, Clone)]
pub struct RevisionRow {
    /// Base file name the row targets
    pub file_name: String,

    /// Text expected to occur verbatim in that file
    pub original_text: String,

    /// Replacement text, possibly blank
    pub revision: String,
}

/// Render the audit log as a CSV sheet.
///
/// Columns: File Name, Element Context, Original Text, Translated Text,
/// Revision. The Revision column is emitted empty so reviewers can fill it
/// in and send the same sheet back. Text cells are written raw - quoting
/// takes care of separators, quotes and line breaks inside them.
pub fn write_audit_sheet(log: &TranslationEntryLog) -> String {
    let mut out = String::new();

    push_record(
        &mut out,
        &[
            COL_FILE_NAME,
            COL_ELEMENT_CONTEXT,
            COL_ORIGINAL_TEXT,
            COL_TRANSLATED_TEXT,
            COL_REVISION,
        ],
    );

    for entry in log.entries() {
        push_record(
            &mut out,
            &[
                &entry.file_name,
                &entry.element_context,
                &entry.original_text,
                &entry.translated_text,
                entry.revision.as_deref().unwrap_or_default(),
            ],
        );
    }

    out
}

/// Parse a revision sheet into rows.
///
/// The first row must be a header naming at least File Name and
/// Original Text. Revisions are read from the Revision column, falling back
/// to Translated Text when no Revision column exists (older exports).
pub fn read_revision_rows(text: &str) -> Result<Vec<RevisionRow>, TabularError> {
    let mut rows = parse_rows(text);
    if rows.is_empty() {
        return Err(TabularError::MissingHeader);
    }

    let header = rows.remove(0);
    let file_name_col = find_column(&header, COL_FILE_NAME)
        .ok_or_else(|| TabularError::MissingColumn(COL_FILE_NAME.to_string()))?;
    let original_col = find_column(&header, COL_ORIGINAL_TEXT)
        .ok_or_else(|| TabularError::MissingColumn(COL_ORIGINAL_TEXT.to_string()))?;
    let revision_col = find_column(&header, COL_REVISION)
        .or_else(|| find_column(&header, COL_TRANSLATED_TEXT))
        .ok_or_else(|| TabularError::MissingColumn(COL_REVISION.to_string()))?;

    Ok(rows
        .into_iter()
        .map(|row| RevisionRow {
            file_name: cell(&row, file_name_col),
            original_text: cell(&row, original_col),
            revision: cell(&row, revision_col),
        })
        .collect())
}

fn find_column(header: &[String], name: &str) -> Option<usize> {
    header.iter().position(|h| h.trim() == name)
}

fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

// CSV mechanics: a cursor-based reader that pulls one cell at a time off
// the front of the input, and a renderer that quotes cells on demand.

/// What ended a cell
enum CellEnd {
    /// A separator; the record continues
    Separator,
    /// A line break; the record is complete
    Record,
    /// End of input
    Input,
}

/// Split sheet text into records of cells.
///
/// Quoted cells may carry separators, doubled-quote escapes and line
/// breaks; both LF and CRLF record breaks are accepted. Blank lines
/// produce no record.
fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut rest = text;
    let mut row: Vec<String> = Vec::new();

    while !rest.is_empty() || !row.is_empty() {
        let (cell, end) = read_cell(&mut rest);
        row.push(cell);

        if matches!(end, CellEnd::Record | CellEnd::Input) {
            let blank_line = row.len() == 1 && row[0].is_empty();
            if blank_line {
                row.clear();
            } else {
                rows.push(take(&mut row));
            }
        }
    }

    rows
}

/// Read one cell off the front of `rest`, consuming its terminator too
fn read_cell(rest: &mut &str) -> (String, CellEnd) {
    if let Some(after_quote) = rest.strip_prefix('"') {
        *rest = after_quote;
        let cell = read_quoted_body(rest);
        // Anything between the closing quote and the terminator is not
        // valid CSV; drop it and resync on the terminator
        let (_, end) = read_bare(rest);
        (cell, end)
    } else {
        read_bare(rest)
    }
}

/// Read an unquoted cell up to the next separator or record break
fn read_bare(rest: &mut &str) -> (String, CellEnd) {
    let mut cell = String::new();

    loop {
        let mut chars = rest.chars();
        let Some(c) = chars.next() else {
            return (cell, CellEnd::Input);
        };
        *rest = chars.as_str();

        match c {
            SEPARATOR => return (cell, CellEnd::Separator),
            '\n' => return (cell, CellEnd::Record),
            '\r' => {
                if let Some(after) = rest.strip_prefix('\n') {
                    *rest = after;
                }
                return (cell, CellEnd::Record);
            }
            _ => cell.push(c),
        }
    }
}

/// Consume a quoted cell body through its closing quote, folding doubled
/// quotes back into literal ones. An unterminated quote swallows the rest
/// of the input as cell content.
fn read_quoted_body(rest: &mut &str) -> String {
    let mut cell = String::new();

    loop {
        match rest.find('"') {
            None => {
                cell.push_str(rest);
                *rest = "";
                return cell;
            }
            Some(pos) => {
                cell.push_str(&rest[..pos]);
                *rest = &rest[pos + 1..];
                if let Some(after) = rest.strip_prefix('"') {
                    cell.push('"');
                    *rest = after;
                } else {
                    return cell;
                }
            }
        }
    }
}

/// Quote a cell only when it carries a separator, quote or line break
fn render_cell(cell: &str) -> String {
    if cell.contains([SEPARATOR, '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Append one record to the sheet buffer
fn push_record(out: &mut String, cells: &[&str]) {
    let rendered: Vec<String> = cells.iter().map(|cell| render_cell(cell)).collect();
    out.push_str(&rendered.join(&SEPARATOR.to_string()));
    out.push('\n');
}
