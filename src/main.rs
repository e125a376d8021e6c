use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use receipt_processor::logging::LogFormat;

const EXIT_SUCCESS: i32 = 0;
const EXIT_SERVER: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "receipt-processor")]
#[command(about = "Receipt intake and loyalty points service", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/receipt-processor/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on (default 127.0.0.1:8080)
    #[arg(short, long, value_name = "ADDR")]
    bind: Option<SocketAddr>,

    /// Log output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load config
    let file_config = match receipt_processor::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let settings = match receipt_processor::config::Settings::resolve(
        file_config,
        cli.bind,
        cli.log_format,
    ) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = receipt_processor::config::validate_config(&settings) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if let Err(e) = receipt_processor::logging::init_logging(settings.log_format, cli.verbose) {
        eprintln!("Logging error: {:#}", e);
        std::process::exit(EXIT_CONFIG);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind = %settings.bind,
        log_format = %settings.log_format,
        "starting receipt processor"
    );

    let state = receipt_processor::server::AppState::new();
    if let Err(e) = receipt_processor::server::run_server(&settings, state).await {
        tracing::error!("server error: {:#}", e);
        std::process::exit(EXIT_SERVER);
    }

    std::process::exit(EXIT_SUCCESS);
}
