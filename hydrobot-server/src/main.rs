use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

mod config;
mod context;
mod logging;
mod server;

use config::BotConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "hydrobot")]
#[command(author, version, about = "HydroBot - water and calorie tracking chat bot")]
struct Args {
    /// Plain-text log file, rotated at 10 MB with 5 backups
    #[arg(long, default_value = "bot.log")]
    log_file: PathBuf,

    /// Log to stderr only
    #[arg(long, default_value = "false")]
    no_log_file: bool,

    /// Default filter directive; RUST_LOG takes precedence when set
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn log_file(&self) -> Option<&std::path::Path> {
        (!self.no_log_file).then_some(self.log_file.as_path())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = logging::init_tracing(&args.log_level, args.log_file())?;
    info!("HydroBot starting. log_level={}, log_file={:?}", args.log_level, args.log_file());

    let config = match BotConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {e}");
            return Err(e.into());
        }
    };

    server::run_server(config).await?;
    Ok(())
}
