/*!
 * Mock provider implementation for testing.
 *
 * This module provides a mock translator that simulates different behaviors:
 * - `MockTranslator::working()` - Always succeeds with tagged text
 * - `MockTranslator::identity()` - Always succeeds, returning the input unchanged
 * - `MockTranslator::intermittent(n)` - Fails every nth request
 * - `MockTranslator::failing()` - Always fails with an error
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::TextTranslator;

/// Behavior mode for the mock translator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds, tagging the text with the target language
    Working,
    /// Always succeeds, returning the input unchanged
    Identity,
    /// Fails intermittently (every nth request)
    Intermittent { fail_every: usize },
    /// Always fails with an error
    Failing,
    /// Returns an empty translation
    Empty,
}

/// Mock translator for exercising translation behavior in tests
#[derive(Debug)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock that tags translations with the target language
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that returns the input text unchanged
    pub fn identity() -> Self {
        Self::new(MockBehavior::Identity)
    }

    /// Create an intermittently failing mock
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Create a failing mock that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns empty translations
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Number of translate calls received so far
    pub fn calls(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockTranslator {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
        }
    }
}

#[async_trait]
impl TextTranslator for MockTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(format!("[{}] {}", target_lang.to_uppercase(), text)),

            MockBehavior::Identity => Ok(text.to_string()),

            MockBehavior::Intermittent { fail_every } => {
                if count % fail_every == fail_every - 1 {
                    Err(ProviderError::Http {
                        status: 503,
                        message: format!("Simulated intermittent failure (request #{})", count + 1),
                    })
                } else {
                    Ok(format!("[{}] {}", target_lang.to_uppercase(), text))
                }
            }

            MockBehavior::Failing => Err(ProviderError::Http {
                status: 500,
                message: "Simulated provider failure".to_string(),
            }),

            MockBehavior::Empty => Ok(String::new()),
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::Unreachable(
                "Simulated unreachable provider".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
