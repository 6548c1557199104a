/*!
 * Package-level orchestration.
 *
 * Drives the per-document engines over every HTML file in an extracted
 * package, one file at a time, in a stable order:
 *
 * - `translate`: full-package translation with a combined audit log
 * - `revise`: revision application or dry-run preview over a package
 */

// Re-export main types for easier usage
pub use self::revise::{
    PackageRevisionResult, PreviewMatch, RevisedFile, RevisionMode, RevisionPipeline,
};
pub use self::translate::{PackageTranslation, PackageTranslationPipeline};

// Submodules
pub mod revise;
pub mod translate;
