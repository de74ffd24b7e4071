//! Farm weather advisory terminal client - Main entry point.

mod commands;
mod config;
mod dashboard;
mod error;
mod render;

use crate::commands::{default_handlers, split_command};
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::error::AppResult;
use advisory_client::AdvisoryClient;
use anyhow::Context;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.app.log_level);

    info!("Starting farm weather advisory client...");

    let client = AdvisoryClient::new(&config.api.base_url, config.api.timeout)?;

    if client.health_check().await {
        info!("Advisory backend reachable at {}", client.base_url());
    } else {
        warn!(
            "Advisory backend not reachable at {} - requests will fail until it is up",
            client.base_url()
        );
    }

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let mut dashboard = Dashboard::new(Arc::new(client), events_tx);

    let handlers = default_handlers();
    info!("Registered {} command handlers", handlers.len());

    println!("{}\n\nType `help` for commands.", dashboard.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // Main event loop
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("Input closed");
                    break;
                };

                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
                    break;
                }

                match handlers.iter().find(|h| h.matches(input)) {
                    Some(handler) => {
                        let (_, args) = split_command(input);
                        match handler.execute(args, &mut dashboard) {
                            Ok(output) => println!("{}", output),
                            Err(e) => {
                                warn!("Command '{}' failed: {}", handler.trigger(), e);
                                println!("{}", e);
                            }
                        }
                    }
                    None => {
                        let (command, _) = split_command(input);
                        println!("Unknown command '{}'. Type `help` for a list of commands.", command);
                    }
                }
            }
            Some(event) = events_rx.recv() => {
                if let Some(output) = dashboard.handle_event(event) {
                    println!("{}", output);
                }
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so they never interleave with the rendered panels.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
