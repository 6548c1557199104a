use log::debug;
use serde::Serialize;

use crate::revision::index::RevisionEntry;

// @module: Verbatim substring replacement of revision pairs

/// Result of applying a substitution list to one document's text
#[derive(Debug)]
pub struct RevisionOutcome {
    /// Content after all matching substitutions
    pub content: String,

    /// How many entries matched and were replaced
    pub applied: usize,
}

/// One entry that currently matches a document, as reported by preview mode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevisionMatch {
    /// Text found in the document
    pub original_text: String,

    /// Replacement that apply mode would insert
    pub revision_text: String,
}

/// Applies revision entries to raw document text
pub struct RevisionApplier;

impl RevisionApplier {
    /// Apply a substitution list to document content.
    ///
    /// Entries are processed in list order. Each matching entry replaces the
    /// first occurrence of its original text, and later entries are checked
    /// against the updated content - an earlier substitution can create or
    /// destroy a later match. Revision rows are authored top-to-bottom with
    /// exactly that expectation, so the chaining is contractual.
    ///
    /// Matching is exact substring comparison, case-sensitive, no patterns.
    pub fn apply(content: &str, revisions: &[RevisionEntry]) -> RevisionOutcome {
        let mut content = content.to_string();
        let mut applied = 0;

        for entry in revisions {
            if content.contains(&entry.original_text) {
                content = content.replacen(&entry.original_text, &entry.revision_text, 1);
                applied += 1;
                debug!(
                    "Replaced {:?} -> {:?}",
                    entry.original_text, entry.revision_text
                );
            }
        }

        RevisionOutcome { content, applied }
    }

    /// Report which entries currently occur in the content, without mutating
    /// anything.
    ///
    /// Every entry is checked independently against the unmodified content,
    /// so the report answers "does this text still exist somewhere" rather
    /// than simulating what apply mode would chain into.
    pub fn preview(content: &str, revisions: &[RevisionEntry]) -> Vec<RevisionMatch> {
        revisions
            .iter()
            .filter(|entry| content.contains(&entry.original_text))
            .map(|entry| RevisionMatch {
                original_text: entry.original_text.clone(),
                revision_text: entry.revision_text.clone(),
            })
            .collect()
    }
}
