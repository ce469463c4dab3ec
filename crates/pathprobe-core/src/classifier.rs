//! Mock backend: classify a URL path as file or directory against the registry.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::error::ProbeError;
use crate::registry::Registry;
use crate::url_model::{has_file_extension, pathname};

/// Backend answer for one URL.
///
/// `is_file` is only set when the path exists; serialized as
/// `{"isExists":true,"isFile":false}` or `{"isExists":false}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub is_exists: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_file: Option<bool>,
}

impl ClassificationResult {
    pub fn missing() -> Self {
        Self {
            is_exists: false,
            is_file: None,
        }
    }

    pub fn file() -> Self {
        Self {
            is_exists: true,
            is_file: Some(true),
        }
    }

    pub fn directory() -> Self {
        Self {
            is_exists: true,
            is_file: Some(false),
        }
    }
}

/// Classifies URL paths against an injected, read-only registry.
///
/// `latency` simulates the backend round trip; zero still yields to the runtime.
#[derive(Debug, Clone)]
pub struct PathClassifier {
    registry: Arc<Registry>,
    latency: Duration,
}

impl PathClassifier {
    pub fn new(registry: Arc<Registry>, latency: Duration) -> Self {
        Self { registry, latency }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Classifies the path component of `url`.
    ///
    /// Paths ending in a 3-4 character extension are looked up by filepath,
    /// everything else by directory. Missing paths are `is_exists: false`,
    /// not errors. Only a URL the parser rejects produces an error.
    pub async fn classify(&self, url: &str) -> Result<ClassificationResult, ProbeError> {
        if self.latency.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.latency).await;
        }

        let path = pathname(url)?;
        let result = self.classify_path(&path);
        tracing::debug!(url, path = %path, ?result, "classified");
        Ok(result)
    }

    fn classify_path(&self, path: &str) -> ClassificationResult {
        if has_file_extension(path) {
            if self.registry.file(path).is_some() {
                ClassificationResult::file()
            } else {
                ClassificationResult::missing()
            }
        } else if self.registry.has_directory(path) {
            ClassificationResult::directory()
        } else {
            ClassificationResult::missing()
        }
    }
}
