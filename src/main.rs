mod activity;
mod app;
mod cli;
mod error;
mod github;

use app::AppConfig;
use clap::Parser;
use cli::Cli;
use github::client::HttpTransport;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config = AppConfig::from_env();

    let lines = HttpTransport::new()
        .and_then(|transport| app::fetch_activity(&config, &cli.username, &transport))
        .unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        });

    if lines.is_empty() {
        println!("No recent activity found.");
        return;
    }

    for line in lines {
        println!("{}", line);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
