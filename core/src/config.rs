use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::runtime::class::detect::is_identifier;

/// Settings shared by a class and every class derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wrap overrides whose source text mentions the super keyword.
    pub detect_super_in_source: bool,
    pub super_keyword: String,
    pub constructor_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            detect_super_in_source: true,
            super_keyword: "super".to_string(),
            constructor_key: "constructor".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_detection(mut self, enabled: bool) -> Self {
        self.detect_super_in_source = enabled;
        self
    }

    pub fn with_super_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.super_keyword = keyword.into();
        self
    }

    pub fn with_constructor_key(mut self, key: impl Into<String>) -> Self {
        self.constructor_key = key.into();
        self
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(source).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_identifier(&self.super_keyword) {
            return Err(ConfigError::InvalidIdentifier {
                field: "super_keyword",
                value: self.super_keyword.clone(),
            });
        }
        if self.constructor_key.is_empty() {
            return Err(ConfigError::InvalidIdentifier {
                field: "constructor_key",
                value: self.constructor_key.clone(),
            });
        }
        Ok(())
    }
}
