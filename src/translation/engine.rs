/*!
 * Core document translation engine.
 *
 * Walks the text leaves of one HTML document in document order, translates
 * each through the injected provider, rewrites the leaf in place and records
 * an audit entry. A single leaf failing to translate is logged and skipped;
 * the rest of the document still goes through.
 */

use log::{debug, warn};
use std::time::Duration;

use crate::document::DocumentTextModel;
use crate::errors::PipelineError;
use crate::providers::TextTranslator;
use crate::translation::entry_log::TranslationEntry;

/// Result of translating one document
pub struct DocumentTranslation {
    /// The serialized document with translated text swapped in
    pub translated_html: String,

    /// Audit entries for each successfully translated leaf, in document order
    pub entries: Vec<TranslationEntry>,

    /// Number of leaves whose translation failed and was skipped
    pub skipped: usize,
}

/// Per-document translation driver
#[derive(Debug, Default)]
pub struct TranslationEngine {
    /// Delay inserted between consecutive provider calls, for rate-sensitive
    /// providers
    request_delay_ms: u64,
}

impl TranslationEngine {
    /// Create an engine with no inter-request delay
    pub fn new() -> Self {
        TranslationEngine { request_delay_ms: 0 }
    }

    /// Set the delay between consecutive provider calls
    pub fn with_request_delay(mut self, request_delay_ms: u64) -> Self {
        self.request_delay_ms = request_delay_ms;
        self
    }

    /// Translate every text leaf of an HTML document.
    ///
    /// Leaves are translated one at a time, in document order; the provider
    /// is never called concurrently for a single document. A leaf whose
    /// translation fails keeps its original text and produces no entry.
    /// If the document has leaves and every single call failed, the failure
    /// is treated as a provider outage and surfaced as an error.
    pub async fn translate_document(
        &self,
        html: &str,
        file_name: &str,
        target_lang: &str,
        translator: &dyn TextTranslator,
    ) -> Result<DocumentTranslation, PipelineError> {
        let model = DocumentTextModel::parse(html).map_err(|e| PipelineError::Document {
            file: file_name.to_string(),
            source: e,
        })?;

        let leaf_count = model.text_leaves().len();
        debug!("{}: {} text leaves to translate", file_name, leaf_count);

        let mut entries = Vec::with_capacity(leaf_count);
        let mut skipped = 0;
        let mut last_failure = None;

        for leaf in model.text_leaves() {
            if self.request_delay_ms > 0 && leaf.index() > 0 {
                tokio::time::sleep(Duration::from_millis(self.request_delay_ms)).await;
            }

            let original_text = model.leaf_text(leaf);

            match translator.translate(&original_text, target_lang).await {
                Ok(translated_text) => {
                    model.set_leaf_text(leaf, &translated_text);
                    entries.push(TranslationEntry::new(
                        file_name,
                        leaf.parent_tag(),
                        original_text,
                        translated_text,
                    ));
                }
                Err(e) => {
                    // Partial-failure tolerance: the leaf keeps its original
                    // text and the document still goes through
                    warn!(
                        "{}: failed to translate leaf {} of {}: {}",
                        file_name,
                        leaf.index() + 1,
                        leaf_count,
                        e
                    );
                    skipped += 1;
                    last_failure = Some(e.to_string());
                }
            }
        }

        if leaf_count > 0 && entries.is_empty() {
            return Err(PipelineError::FileTranslationFailed {
                file: file_name.to_string(),
                message: last_failure.unwrap_or_else(|| "no translation succeeded".to_string()),
            });
        }

        let translated_html = model.serialize().map_err(|e| PipelineError::Document {
            file: file_name.to_string(),
            source: e,
        })?;

        Ok(DocumentTranslation {
            translated_html,
            entries,
            skipped,
        })
    }
}
