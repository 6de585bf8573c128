//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Filesystem path of the serialized model artifact
    pub model_path: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            model_path: lookup("MODEL_PATH")
                .unwrap_or_else(|| "model/aqi.onnx".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_values() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.port, 8080);
        assert_eq!(config.model_path, "model/aqi.onnx");
    }

    #[test]
    fn values_override_defaults() {
        let config = Config::from_lookup(|key| match key {
            "PORT" => Some("9090".to_string()),
            "MODEL_PATH" => Some("/opt/models/aqi.onnx".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 9090);
        assert_eq!(config.model_path, "/opt/models/aqi.onnx");
    }

    #[test]
    fn unparseable_port_falls_back() {
        let config = Config::from_lookup(|key| match key {
            "PORT" => Some("not-a-port".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 8080);
    }
}
