/*!
 * Provider implementations for text translation services.
 *
 * This module contains client implementations for translation providers:
 * - LibreTranslate: self-hosted or hosted LibreTranslate server
 * - Mock: configurable test double
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all text translation providers
///
/// This trait is the capability injected into the translation engine and
/// pipelines, allowing providers to be swapped without touching the core
/// and tests to run against a fake.
#[async_trait]
pub trait TextTranslator: Send + Sync + Debug {
    /// Translate a piece of text into the target language
    ///
    /// # Arguments
    /// * `text` - The text to translate; never empty or whitespace-only
    /// * `target_lang` - Target language code (e.g. "es", "fr")
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the provider is reachable, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod libre;
pub mod mock;
