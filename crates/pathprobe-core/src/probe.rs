//! Keystroke pipeline: debounce, validate, classify, display.

use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::classifier::{ClassificationResult, PathClassifier};
use crate::debounce::{debounce, Debouncer};
use crate::error::ProbeError;
use crate::url_model::is_valid_url;

/// Shown when the input fails syntactic validation.
pub const INVALID_URL_MESSAGE: &str = "Invalid URL format";

/// What the display region shows for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayUpdate {
    Invalid,
    Classified(ClassificationResult),
}

impl fmt::Display for DisplayUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayUpdate::Invalid => f.write_str(INVALID_URL_MESSAGE),
            DisplayUpdate::Classified(result) => {
                let json = serde_json::to_string(result).map_err(|_| fmt::Error)?;
                write!(f, "Response from Backend: {json}")
            }
        }
    }
}

/// Result of running one input value through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// The value as typed.
    pub entered: String,
    pub display: DisplayUpdate,
}

/// Validates `input` and, if it passes, classifies it.
///
/// Validation failure is a normal outcome. An error means the validator
/// accepted something the URL parser could not handle.
pub async fn probe_input(
    classifier: &PathClassifier,
    input: &str,
) -> Result<ProbeOutcome, ProbeError> {
    let display = if is_valid_url(input) {
        DisplayUpdate::Classified(classifier.classify(input).await?)
    } else {
        DisplayUpdate::Invalid
    };
    Ok(ProbeOutcome {
        entered: input.to_string(),
        display,
    })
}

/// One input field: keystrokes go in, debounced outcomes come out on `sink`.
///
/// Every fired keystroke produces an outcome. Input the URL parser rejects
/// after validation is shown as invalid.
pub struct ProbeSession {
    debouncer: Debouncer<String>,
}

impl ProbeSession {
    pub fn new(
        classifier: PathClassifier,
        delay: Duration,
        sink: mpsc::UnboundedSender<ProbeOutcome>,
    ) -> Self {
        let debouncer = debounce(
            move |input: String| {
                let classifier = classifier.clone();
                let sink = sink.clone();
                async move {
                    let outcome = match probe_input(&classifier, &input).await {
                        Ok(outcome) => outcome,
                        // Passed the syntactic gate but the parser disagrees.
                        Err(err) => {
                            tracing::warn!("probe failed for {input:?}: {err}");
                            ProbeOutcome {
                                entered: input,
                                display: DisplayUpdate::Invalid,
                            }
                        }
                    };
                    if sink.send(outcome).is_err() {
                        tracing::debug!("display closed, dropping outcome");
                    }
                }
            },
            delay,
        );
        Self { debouncer }
    }

    /// Feeds the current value of the input field.
    pub fn keystroke(&self, value: impl Into<String>) {
        let value = value.into();
        tracing::trace!(len = value.len(), "keystroke");
        self.debouncer.call(value);
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Waits until the last keystroke has been processed.
    pub async fn settle(&self) {
        self.debouncer.settle().await;
    }
}
