//! Share link configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Share link configuration
///
/// Seeds the presenter-editable deep-link URL that participant devices open
/// (and that the dashboard renders as a QR code).
#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    /// Initial deep-link URL shown on the landing and dashboard screens
    #[serde(default = "default_link")]
    pub link: String,
}

impl ShareConfig {
    /// Validate share configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.link.trim().is_empty() {
            return Err(ValidationError::InvalidShareLink);
        }
        Ok(())
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            link: default_link(),
        }
    }
}

fn default_link() -> String {
    "http://localhost:8080/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_config_default() {
        let config = ShareConfig::default();
        assert_eq!(config.link, "http://localhost:8080/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_blank_link() {
        let config = ShareConfig {
            link: "   ".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
