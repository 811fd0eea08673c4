use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::domain::Club;
use super::SystemError;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Comma-separated CORS origins; `*` allows any origin.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,

    #[serde(default = "default_clubs_seed_path")]
    pub clubs_seed_path: PathBuf,

    #[serde(default = "default_actor_buffer_size")]
    pub actor_buffer_size: usize,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_allowed_origins() -> String {
    "*".to_string()
}

fn default_clubs_seed_path() -> PathBuf {
    PathBuf::from("data/clubs.json")
}

fn default_actor_buffer_size() -> usize {
    32
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            clubs_seed_path: default_clubs_seed_path(),
            actor_buffer_size: default_actor_buffer_size(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Reads `.env` if present, then the process environment.
    pub fn load() -> Result<Self, SystemError> {
        dotenvy::dotenv().ok();
        Self::from_environment(config::Environment::default())
    }

    fn from_environment(environment: config::Environment) -> Result<Self, SystemError> {
        let config = config::Config::builder()
            .add_source(environment.try_parsing(true))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<(), SystemError> {
        if self.actor_buffer_size == 0 {
            return Err(SystemError::InvalidConfig(
                "ACTOR_BUFFER_SIZE must be at least 1".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(SystemError::InvalidConfig(
                "REQUEST_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Explicit CORS origins, or `None` when any origin is allowed.
    pub fn cors_origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            None
        } else {
            Some(origins)
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Loads the club catalog seed: a JSON array of clubs.
pub fn load_seed(path: &Path) -> Result<Vec<Club>, SystemError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SystemError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SystemError::SeedFormat {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::default().source(Some(source))
    }

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = AppConfig::from_environment(environment(&[])).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.cors_origins(), None);
        assert_eq!(config.clubs_seed_path, PathBuf::from("data/clubs.json"));
        assert_eq!(config.actor_buffer_size, 32);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::from_environment(environment(&[
            ("PORT", "8081"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example"),
            ("ACTOR_BUFFER_SIZE", "4"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8081);
        assert_eq!(config.actor_buffer_size, 4);
        assert_eq!(
            config.cors_origins(),
            Some(vec!["https://a.example".to_string(), "https://b.example".to_string()])
        );
    }

    #[test]
    fn test_zero_buffer_is_rejected() {
        let result = AppConfig::from_environment(environment(&[("ACTOR_BUFFER_SIZE", "0")]));

        assert!(matches!(result, Err(SystemError::InvalidConfig(_))));
    }

    #[test]
    fn test_bundled_seed_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/clubs.json");

        let clubs = load_seed(&path).unwrap();

        assert!(!clubs.is_empty());
        assert!(clubs.iter().all(|club| !club.subject.is_empty()));
    }

    #[test]
    fn test_missing_seed_reports_path() {
        let result = load_seed(Path::new("does/not/exist.json"));

        assert!(matches!(result, Err(SystemError::SeedRead { .. })));
    }
}
