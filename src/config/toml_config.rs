use crate::core::ConfigProvider;
use crate::utils::error::{LuckyError, Result};
use crate::utils::validation::{
    validate_one_of, validate_positive_number, validate_socket_addr, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
    pub verbose: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl TomlConfig {
    /// Reads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LuckyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_socket_addr("server.bind_address", &self.server.bind_address)?;

        if let Some(timeout) = self.server.request_timeout_seconds {
            validate_positive_number("server.request_timeout_seconds", timeout, 1)?;
        }

        if let Some(format) = &self.logging.format {
            validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_address(&self) -> &str {
        &self.server.bind_address
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.server.request_timeout_seconds.unwrap_or(10)
    }

    fn log_format(&self) -> &str {
        self.logging.format.as_deref().unwrap_or("compact")
    }

    fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
