use clap::Parser;
use lucky_numbers::app::server;
use lucky_numbers::core::ConfigProvider;
use lucky_numbers::utils::error::LuckyError;
use lucky_numbers::utils::{logger, validation::Validate};
use lucky_numbers::{CliConfig, TomlConfig};

fn fail(e: LuckyError) -> ! {
    tracing::error!(
        "❌ Configuration rejected: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

async fn run<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        fail(e);
    }

    tracing::info!(
        bind_address = config.bind_address(),
        timeout_secs = config.request_timeout_seconds(),
        "✅ Configuration loaded and validated"
    );

    server::serve(&config, server::ctrl_c_signal()).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.config.clone() {
        Some(path) => {
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(e.exit_code());
                }
            };
            logger::init_logger(config.log_format(), config.verbose() || cli.verbose);
            tracing::info!("📁 Loaded configuration from: {}", path);
            run(config).await
        }
        None => {
            logger::init_logger(cli.log_format(), cli.verbose);
            tracing::debug!("CLI config: {:?}", cli);
            run(cli).await
        }
    }
}
