//! config::schema
//!
//! Configuration schema types.
//!
//! # Example
//!
//! ```toml
//! [[instances]]
//! host = "github.example.com"
//! api_base_url = "https://github.example.com/api/v3"
//! web_base_url = "https://github.example.com"
//! ```

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Top-level configuration.
///
/// Lists the self-hosted instances entities may point at via their
/// host-override annotation. An empty list means only the public host
/// is reachable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Per-instance host overrides, searched in order.
    pub instances: Vec<InstanceConfig>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any instance is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for instance in &self.instances {
            instance.validate()?;
        }
        Ok(())
    }
}

/// A single self-hosted instance record.
///
/// `host` identifies the instance; the URL fields are optional and,
/// when omitted, are derived from the host using the GitHub Enterprise
/// convention (`https://{host}/api/v3`, `https://{host}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct InstanceConfig {
    /// Host identifier (e.g., "github.example.com").
    pub host: String,

    /// API base URL override.
    pub api_base_url: Option<String>,

    /// Web base URL override.
    pub web_base_url: Option<String>,
}

impl InstanceConfig {
    /// Validate the instance record.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::InvalidValue(
                "instance host cannot be empty".to_string(),
            ));
        }
        if self.host.contains('/') {
            return Err(ConfigError::InvalidValue(format!(
                "instance host '{}' must be a bare hostname, not a URL",
                self.host
            )));
        }
        for url in [&self.api_base_url, &self.web_base_url].into_iter().flatten() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue(format!(
                    "instance URL '{}' must start with http:// or https://",
                    url
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GlobalConfig::default();
        assert!(config.instances.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn valid_instance() {
        let config = GlobalConfig {
            instances: vec![InstanceConfig {
                host: "github.example.com".to_string(),
                api_base_url: Some("https://github.example.com/api/v3".to_string()),
                web_base_url: Some("https://github.example.com".to_string()),
            }],
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn instance_without_urls_is_valid() {
        let config = GlobalConfig {
            instances: vec![InstanceConfig {
                host: "github.example.com".to_string(),
                ..Default::default()
            }],
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_host_rejected() {
        let config = GlobalConfig {
            instances: vec![InstanceConfig::default()],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn host_with_scheme_rejected() {
        let config = GlobalConfig {
            instances: vec![InstanceConfig {
                host: "https://github.example.com".to_string(),
                ..Default::default()
            }],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_http_url_rejected() {
        let config = GlobalConfig {
            instances: vec![InstanceConfig {
                host: "github.example.com".to_string(),
                api_base_url: Some("ftp://github.example.com".to_string()),
                web_base_url: None,
            }],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn roundtrip() {
        let config = GlobalConfig {
            instances: vec![
                InstanceConfig {
                    host: "github.example.com".to_string(),
                    api_base_url: Some("https://github.example.com/api/v3".to_string()),
                    web_base_url: Some("https://github.example.com".to_string()),
                },
                InstanceConfig {
                    host: "ghe.internal".to_string(),
                    api_base_url: None,
                    web_base_url: None,
                },
            ],
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: GlobalConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn reject_unknown_fields() {
        let toml = r#"
            [[instances]]
            host = "github.example.com"
            unknown_field = true
        "#;

        let result: Result<GlobalConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
