//! Library error type.

use thiserror::Error;

/// Errors surfaced by the registry and the classifier.
///
/// Invalid user input is not an error here: the validator reports it as a
/// display message, and missing paths are `isExists: false` results.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The classifier was handed a string the URL parser rejects.
    #[error("malformed URL: {url}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Two registry entries share the same filepath.
    #[error("duplicate filepath in registry: {0}")]
    DuplicateFilepath(String),
}
