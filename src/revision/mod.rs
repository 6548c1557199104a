/*!
 * Revision reapplication for previously translated packages.
 *
 * Human reviewers edit the exported audit sheet and send it back; this
 * module turns those rows into per-file substitution lists and applies
 * them (or reports what would match):
 *
 * - `index`: rows grouped by file name, in source row order
 * - `applier`: verbatim substring replacement and dry-run matching
 */

// Re-export main types for easier usage
pub use self::applier::{RevisionApplier, RevisionMatch, RevisionOutcome};
pub use self::index::{RevisionEntry, RevisionIndex};

// Submodules
pub mod applier;
pub mod index;
