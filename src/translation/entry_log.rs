use serde::{Deserialize, Serialize};

// @module: Translation audit log

/// One translated text run, as recorded in the audit sheet.
///
/// `original_text` is the exact pre-translation string of one text leaf,
/// whitespace preserved, so a later revision import can match it against
/// document content byte-for-byte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationEntry {
    /// Base name of the file the text came from
    pub file_name: String,

    /// Tag name of the element directly containing the text
    pub element_context: String,

    /// Raw text before translation
    pub original_text: String,

    /// Text returned by the provider
    pub translated_text: String,

    /// Human-supplied correction, attached after export
    pub revision: Option<String>,
}

impl TranslationEntry {
    /// Create a new entry with no revision attached
    pub fn new(
        file_name: impl Into<String>,
        element_context: impl Into<String>,
        original_text: impl Into<String>,
        translated_text: impl Into<String>,
    ) -> Self {
        TranslationEntry {
            file_name: file_name.into(),
            element_context: element_context.into(),
            original_text: original_text.into(),
            translated_text: translated_text.into(),
            revision: None,
        }
    }
}

/// Ordered audit log accumulated across all documents in one package.
///
/// Order is (file, then in-file traversal) order and is what the exported
/// sheet reproduces row for row.
#[derive(Debug, Default)]
pub struct TranslationEntryLog {
    entries: Vec<TranslationEntry>,
}

impl TranslationEntryLog {
    /// Create an empty log
    pub fn new() -> Self {
        TranslationEntryLog {
            entries: Vec::new(),
        }
    }

    /// Append one entry
    pub fn push(&mut self, entry: TranslationEntry) {
        self.entries.push(entry);
    }

    /// Append a document's entries, preserving their order
    pub fn extend(&mut self, entries: Vec<TranslationEntry>) {
        self.entries.extend(entries);
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    /// Number of entries in the log
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
