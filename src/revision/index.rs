use std::collections::HashMap;

use log::debug;

use crate::tabular::RevisionRow;

// @module: Revision index built from imported sheet rows

/// One substitution pair for a specific file.
///
/// `original_text` must occur byte-for-byte in the target file for the
/// substitution to happen.
#[derive(Debug, Clone, PartialEq)]
pub struct RevisionEntry {
    /// Text currently present in the document
    pub original_text: String,

    /// Text to put in its place
    pub revision_text: String,
}

/// Mapping from base file name to its ordered substitution list.
///
/// Per-file order is source row order; rows are applied top-to-bottom, each
/// replacing the first occurrence present at that time, so duplicate
/// original texts hit successive occurrences.
#[derive(Debug, Default)]
pub struct RevisionIndex {
    by_file: HashMap<String, Vec<RevisionEntry>>,
}

impl RevisionIndex {
    /// Build an index from imported sheet rows.
    ///
    /// Rows with a blank file name or original text are skipped, as are rows
    /// whose revision cell is blank - reviewers legitimately leave rows they
    /// have not revised yet, and those are no-ops rather than errors.
    pub fn build(rows: Vec<RevisionRow>) -> Self {
        let mut by_file: HashMap<String, Vec<RevisionEntry>> = HashMap::new();
        let mut skipped = 0;

        for row in rows {
            let file_name = row.file_name.trim();
            if file_name.is_empty()
                || row.original_text.trim().is_empty()
                || row.revision.trim().is_empty()
            {
                skipped += 1;
                continue;
            }

            by_file
                .entry(file_name.to_string())
                .or_default()
                .push(RevisionEntry {
                    original_text: row.original_text,
                    revision_text: row.revision,
                });
        }

        if skipped > 0 {
            debug!("Skipped {} incomplete revision rows", skipped);
        }

        RevisionIndex { by_file }
    }

    /// Substitution list for a file, if the sheet had any usable rows for it
    pub fn get(&self, file_name: &str) -> Option<&[RevisionEntry]> {
        self.by_file.get(file_name.trim()).map(|v| v.as_slice())
    }

    /// Number of files with at least one substitution
    pub fn file_count(&self) -> usize {
        self.by_file.len()
    }

    /// Total number of substitution pairs across all files
    pub fn len(&self) -> usize {
        self.by_file.values().map(|v| v.len()).sum()
    }

    /// Whether the index holds no substitutions at all
    pub fn is_empty(&self) -> bool {
        self.by_file.is_empty()
    }
}
