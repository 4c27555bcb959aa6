pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_positive_number, validate_socket_addr, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "lucky-numbers")]
#[command(about = "Feng-shui lucky number service")]
pub struct CliConfig {
    #[arg(long, env = "LUCKY_BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    pub bind_address: String,

    /// Optional TOML file; when given it replaces the flags below
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = "10")]
    pub request_timeout_seconds: u64,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        &self.bind_address
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.request_timeout_seconds
    }

    fn log_format(&self) -> &str {
        if self.json_logs {
            "json"
        } else {
            "compact"
        }
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("bind_address", &self.bind_address)?;
        validate_positive_number("request_timeout_seconds", self.request_timeout_seconds, 1)?;
        Ok(())
    }
}
