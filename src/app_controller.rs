use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::package::{PackageDir, PackageFile};
use crate::pipeline::revise::{PackageRevisionResult, PreviewMatch, RevisionMode, RevisionPipeline};
use crate::pipeline::translate::PackageTranslationPipeline;
use crate::providers::TextTranslator;
use crate::providers::libre::LibreTranslate;
use crate::revision::index::RevisionIndex;
use crate::tabular;
use crate::translation::engine::TranslationEngine;

// @module: Application controller for package processing

/// Summary of one translation run
#[derive(Debug)]
pub struct TranslationSummary {
    /// Number of HTML documents processed
    pub files: usize,

    /// Number of text leaves translated
    pub translated: usize,

    /// Number of text leaves skipped after provider failures
    pub skipped: usize,
}

/// Summary of one revision run
#[derive(Debug)]
pub struct RevisionSummary {
    /// Number of HTML documents processed
    pub files: usize,

    /// Total revision entries applied across the package
    pub applied: usize,
}

/// Main application controller for package translation and revision
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build the configured provider client
    pub fn build_translator(&self) -> LibreTranslate {
        LibreTranslate::new(
            self.config.provider.endpoint.clone(),
            self.config.provider.timeout_secs,
        )
        .with_retries(
            self.config.provider.retry_count,
            self.config.provider.retry_backoff_ms,
        )
        .with_api_key(self.config.provider.api_key.clone())
    }

    /// Translate a package directory into an output directory, writing the
    /// audit sheet alongside.
    ///
    /// The output directory receives a full copy of the package (assets
    /// untouched) with the HTML documents replaced by their translations.
    pub async fn run_translation(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        sheet_path: &Path,
        translator: &dyn TextTranslator,
    ) -> Result<TranslationSummary> {
        let start_time = std::time::Instant::now();

        let package = PackageDir::new(input_dir)?;
        let files = package.load_html_files()?;
        if files.is_empty() {
            return Err(anyhow!("No HTML files found in {:?}", input_dir));
        }
        info!("Found {} HTML files in {:?}", files.len(), input_dir);

        if let Err(e) = translator.test_connection().await {
            warn!("Provider connection check failed: {}", e);
        }

        let engine = TranslationEngine::new()
            .with_request_delay(self.config.provider.rate_limit_delay_ms);
        let pipeline = PackageTranslationPipeline::new(engine);

        let translation = pipeline
            .translate_package(&files, &self.config.target_language, translator)
            .await
            .with_context(|| format!("Failed to translate package {:?}", input_dir))?;

        if translation.skipped > 0 {
            warn!(
                "{} text leaves kept their original text after provider failures",
                translation.skipped
            );
        }

        package.mirror_to(output_dir)?;
        PackageDir::write_files(output_dir, &translation.files)?;

        let sheet = tabular::write_audit_sheet(&translation.log);
        if let Some(parent) = sheet_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }
        std::fs::write(sheet_path, sheet)
            .with_context(|| format!("Failed to write audit sheet: {:?}", sheet_path))?;

        info!(
            "Translated {} files ({} entries, {} skipped) in {:.1}s",
            translation.files.len(),
            translation.log.len(),
            translation.skipped,
            start_time.elapsed().as_secs_f64()
        );

        Ok(TranslationSummary {
            files: translation.files.len(),
            translated: translation.log.len(),
            skipped: translation.skipped,
        })
    }

    /// Apply a revision sheet to a package directory, writing the revised
    /// package into an output directory.
    pub fn run_revision(
        &self,
        input_dir: &Path,
        sheet_path: &Path,
        output_dir: &Path,
    ) -> Result<RevisionSummary> {
        let (package, files, index) = Self::load_revision_inputs(input_dir, sheet_path)?;

        let result = RevisionPipeline::run(RevisionMode::Apply, &files, &index);
        let revised = match result {
            PackageRevisionResult::Applied(revised) => revised,
            PackageRevisionResult::Preview(_) => unreachable!("apply mode returns applied files"),
        };

        let applied: usize = revised.iter().map(|r| r.applied).sum();
        let updated: Vec<PackageFile> = revised.into_iter().map(|r| r.file).collect();

        package.mirror_to(output_dir)?;
        PackageDir::write_files(output_dir, &updated)?;

        info!(
            "Applied {} revisions across {} files into {:?}",
            applied,
            updated.len(),
            output_dir
        );

        Ok(RevisionSummary {
            files: updated.len(),
            applied,
        })
    }

    /// Report which revision rows would match the package right now,
    /// without touching anything on disk.
    pub fn run_preview(&self, input_dir: &Path, sheet_path: &Path) -> Result<Vec<PreviewMatch>> {
        let (_package, files, index) = Self::load_revision_inputs(input_dir, sheet_path)?;

        let result = RevisionPipeline::run(RevisionMode::Preview, &files, &index);
        match result {
            PackageRevisionResult::Preview(report) => Ok(report),
            PackageRevisionResult::Applied(_) => unreachable!("preview mode returns a report"),
        }
    }

    /// Shared setup for the revision flows: package files plus parsed index
    fn load_revision_inputs(
        input_dir: &Path,
        sheet_path: &Path,
    ) -> Result<(PackageDir, Vec<PackageFile>, RevisionIndex)> {
        let package = PackageDir::new(input_dir)?;
        let files = package.load_html_files()?;
        if files.is_empty() {
            return Err(anyhow!("No HTML files found in {:?}", input_dir));
        }

        let sheet_text = std::fs::read_to_string(sheet_path)
            .with_context(|| format!("Failed to read revision sheet: {:?}", sheet_path))?;
        let rows = tabular::read_revision_rows(&sheet_text)
            .with_context(|| format!("Failed to parse revision sheet: {:?}", sheet_path))?;
        let index = RevisionIndex::build(rows);

        info!(
            "Loaded {} revision entries for {} files",
            index.len(),
            index.file_count()
        );

        Ok((package, files, index))
    }
}
