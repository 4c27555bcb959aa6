pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use self::core::{calculator::LuckyNumberCalculator, service::LuckyService};
pub use domain::model::{CalculateSubmission, LuckyNumberRequest, LuckyNumberResult};
pub use utils::error::{LuckyError, Result};
