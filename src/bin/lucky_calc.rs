use clap::Parser;
use lucky_numbers::utils::logger;
use lucky_numbers::{CalculateSubmission, LuckyService, Result};

#[derive(Parser)]
#[command(name = "lucky-calc")]
#[command(about = "Calculate feng-shui lucky numbers from the command line")]
struct Args {
    /// Full name, e.g. "Nguyễn Văn An"
    #[arg(long)]
    full_name: String,

    /// Birth date as YYYY-MM-DD
    #[arg(long)]
    birth_date: String,

    /// male or female
    #[arg(long)]
    gender: String,

    #[arg(long)]
    house_direction: Option<String>,

    #[arg(long)]
    profession: Option<String>,

    /// Print only the share line instead of the JSON result
    #[arg(long)]
    share: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn render(args: &Args, submission: CalculateSubmission) -> Result<String> {
    let result = LuckyService::new().calculate(submission)?;
    if args.share {
        Ok(result.share_text())
    } else {
        Ok(serde_json::to_string_pretty(&result)?)
    }
}

fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let submission = CalculateSubmission {
        full_name: Some(args.full_name.clone()),
        birth_date: Some(args.birth_date.clone()),
        gender: Some(args.gender.clone()),
        house_direction: args.house_direction.clone(),
        profession: args.profession.clone(),
    };

    match render(&args, submission) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::debug!("Calculation failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
