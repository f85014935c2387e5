use clap::Parser;
use scr_sources::logging::init_logging;
use tracing::info;

mod config;
mod dashboard;
mod duration;

use config::{ServeArgs, ServiceConfig};
use dashboard::DashboardArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Supply chain risk reports from news APIs", long_about = None)]
pub struct Cli {
    /// Default log filter, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve GET /analyze_risks
    Serve(ServeArgs),
    /// Render the risk dashboard from a running report service
    Dashboard(DashboardArgs),
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = ServiceConfig::from(args);
    config.log_summary();

    let aggregator = config.build_aggregator()?;
    info!("🦗 Sources initialized successfully: {}", aggregator.source_names().join(", "));

    scr_web::serve(config.bind, scr_web::AppState::new(aggregator)).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Serve(args) => serve(args).await,
        Commands::Dashboard(args) => dashboard::run(args).await,
    }
}
