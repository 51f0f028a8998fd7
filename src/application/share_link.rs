//! The presenter-editable deep-link URL.

use std::sync::RwLock;

use tracing::info;

use crate::domain::foundation::ValidationError;

/// Holds the URL participants open (and the dashboard renders as a QR
/// code). Editable by the presenter at runtime; rendering the code itself
/// is the UI's job.
///
/// # Panics
///
/// Methods panic if the interior lock is poisoned.
pub struct ShareLink {
    url: RwLock<String>,
}

impl ShareLink {
    /// Creates the link with its configured initial URL.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            url: RwLock::new(initial.into()),
        }
    }

    /// Returns the current URL.
    pub fn get(&self) -> String {
        self.url.read().expect("share link lock poisoned").clone()
    }

    /// Replaces the URL. Blank values are rejected.
    pub fn set(&self, url: impl Into<String>) -> Result<(), ValidationError> {
        let url = url.into().trim().to_string();
        if url.is_empty() {
            return Err(ValidationError::blank("share_link"));
        }
        let mut current = self.url.write().expect("share link lock poisoned");
        info!(from = %current.as_str(), to = %url, "share link updated");
        *current = url;
        Ok(())
    }
}
