//! HTTP DTOs for share-link endpoints.

use serde::{Deserialize, Serialize};

/// The current deep-link URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLinkView {
    pub url: String,
}

/// Request body for replacing the deep-link URL.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShareLinkRequest {
    pub url: String,
}
