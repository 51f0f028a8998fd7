//! Typed configuration loaded from the environment.
//!
//! Settings arrive as environment variables carrying the `STYLE_PULSE`
//! prefix, with `__` separating nested sections, and deserialize into the
//! section structs here. A `.env` file is honored in development.
//!
//! ```no_run
//! use style_pulse::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration must parse");
//! config.validate().expect("configuration must be usable");
//!
//! println!("listening on {}", config.server.bind_addr());
//! ```

mod ai;
mod error;
mod server;
mod share;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use share::ShareConfig;

use serde::Deserialize;

/// All configuration sections.
///
/// Every field has a workable default, so the service boots with no
/// environment at all: it listens on 8080, logs at info, and runs without
/// an AI credential (narratives degrade to the fallback text).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener, environment, logging, timeouts, CORS.
    #[serde(default)]
    pub server: ServerConfig,

    /// Narrative-generation provider settings.
    #[serde(default)]
    pub ai: AiConfig,

    /// Seed for the presenter-editable deep link.
    #[serde(default)]
    pub share: ShareConfig,
}

impl AppConfig {
    /// Reads `.env` when present, then the prefixed environment.
    ///
    /// `STYLE_PULSE__SERVER__PORT=9090` lands in `server.port`;
    /// `STYLE_PULSE__AI__ANTHROPIC_API_KEY=...` in `ai.anthropic_api_key`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STYLE_PULSE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section for values the service cannot run with.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.share.validate()?;
        Ok(())
    }

    /// True when the server section says production.
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Environment variables are process-global, so these tests serialize.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            "STYLE_PULSE__SERVER__PORT",
            "STYLE_PULSE__SERVER__ENVIRONMENT",
            "STYLE_PULSE__AI__ANTHROPIC_API_KEY",
            "STYLE_PULSE__SHARE__LINK",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn empty_environment_boots_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().expect("defaults must load");
        assert_eq!(config.server.bind_addr().to_string(), "0.0.0.0:8080");
        assert!(config.ai.anthropic_api_key.is_none());
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nested_variables_reach_their_sections() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("STYLE_PULSE__SERVER__PORT", "3000");
        env::set_var("STYLE_PULSE__SHARE__LINK", "https://pulse.example.com/s/42");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.share.link, "https://pulse.example.com/s/42");
    }

    #[test]
    fn production_environment_is_detected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("STYLE_PULSE__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }
}
