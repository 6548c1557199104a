/*!
 * Error taxonomy for scormtran.
 *
 * Each processing layer carries its own thiserror enum: provider calls,
 * document parsing and serialization, sheet import, and package
 * orchestration. `AppError` is the application-facing roll-up.
 */

// Some variants and conversions exist for library consumers only
#![allow(dead_code)]

use thiserror::Error;

/// Failures surfaced by a translation provider call.
///
/// LibreTranslate reports problems as an HTTP status plus a JSON body of
/// the form `{"error": "<message>"}`; that message is what lands in these
/// variants. The mock provider produces the same shapes for tests.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No HTTP response at all: DNS failure, refused connection, or the
    /// request timed out client-side
    #[error("Translate endpoint unreachable: {0}")]
    Unreachable(String),

    /// A 2xx response whose body could not be read, or was not the
    /// documented `{"translatedText": ...}` shape
    #[error("Unusable translate response: {0}")]
    BadResponse(String),

    /// Any other non-success status, with the server's error message
    #[error("Translate endpoint returned HTTP {status}: {message}")]
    Http {
        /// HTTP status code of the failed response
        status: u16,
        /// Error message extracted from the response body
        message: String,
    },

    /// HTTP 429, the server asked for slower traffic
    #[error("Throttled by translate endpoint: {0}")]
    Throttled(String),

    /// HTTP 401/403: missing, invalid, or banned API key
    #[error("Translate endpoint rejected the API key: {0}")]
    InvalidApiKey(String),

    /// HTTP 400 naming a target language the server does not serve
    #[error("Target language not available on this endpoint: {0}")]
    UnsupportedLanguage(String),
}

/// Errors that can occur while parsing or serializing an HTML document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The input could not be parsed into a document tree
    #[error("Failed to parse HTML document: {0}")]
    Parse(String),

    /// The document tree could not be written back out as text
    #[error("Failed to serialize HTML document: {0}")]
    Serialize(String),
}

/// Errors that can occur while reading an imported revision sheet
#[derive(Error, Debug)]
pub enum TabularError {
    /// The sheet has no header row at all
    #[error("Revision sheet has no header row")]
    MissingHeader,

    /// A required column is absent from the header row
    #[error("Revision sheet is missing required column: {0}")]
    MissingColumn(String),
}

/// Errors that abort package-level processing
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A document in the package could not be parsed or serialized
    #[error("Failed to process document {file}: {source}")]
    Document {
        /// Base name of the offending file
        file: String,
        #[source]
        source: DocumentError,
    },

    /// Every text node in a document failed to translate (provider outage)
    #[error("Translation failed for every text node in {file}: {message}")]
    FileTranslationFailed {
        /// Base name of the offending file
        file: String,
        /// Last provider error observed for the file
        message: String,
    },
}

/// Application-facing error wrapping every lower layer
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from document processing
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from sheet import
    #[error("Tabular error: {0}")]
    Tabular(#[from] TabularError),

    /// Error from package processing
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Conversions from the application layer's catch-all error types
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
