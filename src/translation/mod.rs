/*!
 * Document translation engine and its audit log.
 *
 * This module drives the text-node translation of a single HTML document:
 *
 * - `engine`: per-document translation loop over text leaves
 * - `entry_log`: ordered audit log of original/translated text pairs
 */

// Re-export main types for easier usage
pub use self::engine::{DocumentTranslation, TranslationEngine};
pub use self::entry_log::{TranslationEntry, TranslationEntryLog};

// Submodules
pub mod engine;
pub mod entry_log;
