use log::{debug, info};

use crate::errors::PipelineError;
use crate::package::PackageFile;
use crate::providers::TextTranslator;
use crate::translation::engine::TranslationEngine;
use crate::translation::entry_log::TranslationEntryLog;

// @module: Whole-package translation

/// Result of translating a package
pub struct PackageTranslation {
    /// Translated documents, in input order
    pub files: Vec<PackageFile>,

    /// Combined audit log, in (file, then in-file traversal) order
    pub log: TranslationEntryLog,

    /// Total number of leaves skipped across all files
    pub skipped: usize,
}

/// Translates every HTML document of a package through one engine
pub struct PackageTranslationPipeline {
    engine: TranslationEngine,
}

impl PackageTranslationPipeline {
    /// Create a pipeline around a configured engine
    pub fn new(engine: TranslationEngine) -> Self {
        PackageTranslationPipeline { engine }
    }

    /// Translate a package's documents in the given order.
    ///
    /// Files are processed strictly one at a time so the provider sees
    /// sequential traffic and the audit log order is reproducible. A file
    /// that fails outright (unparseable, or no node translated at all)
    /// aborts the whole run: a partially translated package with missing
    /// audit rows is worse than no output.
    pub async fn translate_package(
        &self,
        files: &[PackageFile],
        target_lang: &str,
        translator: &dyn TextTranslator,
    ) -> Result<PackageTranslation, PipelineError> {
        let mut log = TranslationEntryLog::new();
        let mut translated = Vec::with_capacity(files.len());
        let mut skipped = 0;

        for file in files {
            info!("Translating {}", file.name);

            let outcome = self
                .engine
                .translate_document(&file.content, &file.name, target_lang, translator)
                .await?;

            debug!(
                "{}: {} entries, {} skipped",
                file.name,
                outcome.entries.len(),
                outcome.skipped
            );

            skipped += outcome.skipped;
            log.extend(outcome.entries);
            translated.push(PackageFile {
                name: file.name.clone(),
                rel_path: file.rel_path.clone(),
                content: outcome.translated_html,
            });
        }

        Ok(PackageTranslation {
            files: translated,
            log,
            skipped,
        })
    }
}
