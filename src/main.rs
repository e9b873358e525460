//! Sybil risk dashboard - terminal executable
//!
//! Renders the home overview or a player's address page and, unless asked
//! to render once, keeps the risk panel refreshing until Ctrl+C.
use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use log::info;
use std::sync::Arc;
use sybil_dashboard::{create_application, parse_route, AppConfig, Console, Route, ServiceContainer};

#[derive(Parser, Debug)]
#[command(name = "sybil-dashboard")]
#[command(about = "Sybil risk dashboard for game players")]
#[command(version)]
struct Cli {
    /// Page to render: "/" for the overview, or "/address/<addr>"
    #[arg(default_value = "/")]
    route: String,

    /// Round shown on the overview page
    #[arg(long, default_value = "all")]
    round: String,

    /// Render the page once and exit without polling risk scores
    #[arg(long)]
    once: bool,
}

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting Sybil dashboard v{}", sybil_dashboard::VERSION);

    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load dashboard configuration")?;
    let route = parse_route(&cli.route).context("Unrecognized route")?;

    let services = Arc::new(
        ServiceContainer::new(config).context("Failed to initialize explorer client")?,
    );
    let app = create_application(services, Console::stdout());

    match route {
        Route::Home => {
            app.home.show_overview(&cli.round).await?;
        }
        Route::Address(address) => {
            app.address.show_page(&address).await?;

            if cli.once {
                return Ok(());
            }

            let mut poller = app.risk_poller();
            poller.start();

            info!("Dashboard is running! Press Ctrl+C to stop.");
            tokio::signal::ctrl_c()
                .await
                .context("Failed to listen for Ctrl+C")?;

            poller.stop().await;
        }
    }

    Ok(())
}
