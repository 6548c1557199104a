use log::debug;
use serde::Serialize;

use crate::package::PackageFile;
use crate::revision::applier::{RevisionApplier, RevisionMatch};
use crate::revision::index::RevisionIndex;

// @module: Whole-package revision application and preview

/// Whether to mutate the package or just report matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionMode {
    /// Replace matching text and return the updated package
    Apply,
    /// Report which revisions would currently match, mutating nothing
    Preview,
}

/// One document after apply mode ran over it
#[derive(Debug)]
pub struct RevisedFile {
    /// The document, updated if anything matched
    pub file: PackageFile,

    /// How many revision entries were applied to it
    pub applied: usize,
}

/// Preview report for one document with at least one match
#[derive(Debug, Serialize)]
pub struct PreviewMatch {
    /// Base name of the document
    pub file: String,

    /// Entries whose original text currently occurs in the document
    pub matches: Vec<RevisionMatch>,
}

/// Result of running the revision pipeline over a package
pub enum PackageRevisionResult {
    /// Apply mode: every input file, updated where revisions matched
    Applied(Vec<RevisedFile>),

    /// Preview mode: only files with at least one match
    Preview(Vec<PreviewMatch>),
}

/// Runs the revision applier over every HTML document of a package
pub struct RevisionPipeline;

impl RevisionPipeline {
    /// Process a package against a revision index.
    ///
    /// Apply mode returns all files - documents the sheet never mentions
    /// pass through unchanged so the output is still a complete package.
    /// Preview mode omits files with zero matches; the report is for human
    /// review and silence means nothing would happen.
    pub fn run(
        mode: RevisionMode,
        files: &[PackageFile],
        index: &RevisionIndex,
    ) -> PackageRevisionResult {
        match mode {
            RevisionMode::Apply => {
                let mut revised = Vec::with_capacity(files.len());

                for file in files {
                    match index.get(&file.name) {
                        Some(revisions) => {
                            let outcome = RevisionApplier::apply(&file.content, revisions);
                            debug!("{}: applied {} revisions", file.name, outcome.applied);
                            revised.push(RevisedFile {
                                file: PackageFile {
                                    name: file.name.clone(),
                                    rel_path: file.rel_path.clone(),
                                    content: outcome.content,
                                },
                                applied: outcome.applied,
                            });
                        }
                        None => revised.push(RevisedFile {
                            file: file.clone(),
                            applied: 0,
                        }),
                    }
                }

                PackageRevisionResult::Applied(revised)
            }

            RevisionMode::Preview => {
                let mut report = Vec::new();

                for file in files {
                    if let Some(revisions) = index.get(&file.name) {
                        let matches = RevisionApplier::preview(&file.content, revisions);
                        if !matches.is_empty() {
                            report.push(PreviewMatch {
                                file: file.name.clone(),
                                matches,
                            });
                        }
                    }
                }

                PackageRevisionResult::Preview(report)
            }
        }
    }
}
