//! bhvr-server entry point.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bhvr_server::api::{self, AppState};
use bhvr_server::badge::extract_badges;
use bhvr_server::client::{HelloClient, HelloView};
use bhvr_server::config::Config;
use bhvr_server::metrics;
use bhvr_server::utils::shutdown_signal;

/// Minimal JSON-over-HTTP starter service.
#[derive(Parser, Debug)]
#[command(name = "bhvr-server")]
#[command(about = "Starter JSON API with a terminal client")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Call GET /hello once and print the result.
    Call {
        /// Service base URL (overrides SERVER_URL).
        #[arg(long)]
        url: Option<String>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Check the CI badges in a README.
    CheckBadges {
        /// Markdown file to scan.
        #[arg(long, default_value = "README.md")]
        readme: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Configuration also carries the log settings, so load it first.
    let loaded = Config::load();
    let (rust_log, log_json) = match &loaded {
        Ok(c) => (c.rust_log.clone(), c.log_json),
        Err(_) => ("info".to_string(), false),
    };
    let verbose = args.verbose || loaded.as_ref().map(|c| c.verbose).unwrap_or(false);

    // Initialize logging
    let filter = if verbose {
        EnvFilter::new("bhvr_server=debug,info")
    } else {
        EnvFilter::try_new(&rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(log_json.then(|| fmt::layer().json()))
        .with((!log_json).then(|| fmt::layer()))
        .with(filter)
        .init();

    // Initialize metrics
    metrics::init_metrics();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(loaded),
        Some(Command::CheckBadges { readme }) => cmd_check_badges(readme).await,
        Some(Command::Call { url }) => cmd_call(loaded?, url).await,
        Some(Command::Serve { port }) => cmd_serve(loaded?, port.or(args.port)).await,
        None => cmd_serve(loaded?, args.port).await,
    }
}

/// Check configuration validity.
fn cmd_check_config(loaded: Result<Config, envy::Error>) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("BHVR SERVER - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match loaded {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    let version = config.version_info();
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}", config.listen_addr());
    match config.metrics_port {
        Some(port) => println!("  Metrics Port: {}", port),
        None => println!("  Metrics: Disabled"),
    }
    println!("  Version: {}", version.version);
    println!("  Name: {}", version.name);
    println!("  Server URL: {}", config.server_url);
    println!("  Log Format: {}", if config.log_json { "JSON" } else { "Text" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(mut config: Config, port_override: Option<u16>) -> anyhow::Result<()> {
    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    if let Some(metrics_port) = config.metrics_port {
        let addr = SocketAddr::new(config.host, metrics_port);
        metrics::install_prometheus(addr)?;
        info!("Prometheus exporter listening on {}", addr);
    }

    let version = config.version_info();
    info!("Serving {} v{}", version.name, version.version);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    api::serve(listener, AppState::new(version), shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

/// Call GET /hello once and print what the view shows.
async fn cmd_call(config: Config, url_override: Option<String>) -> anyhow::Result<()> {
    let base_url = url_override.unwrap_or(config.server_url);
    let client = HelloClient::new(&base_url)?;
    let mut view = HelloView::new();

    if !view.refresh(&client).await {
        return Err(anyhow::anyhow!("request to {} failed", client.base_url()));
    }

    println!("{}", view.render());
    Ok(())
}

/// Check every badge image in a Markdown file.
async fn cmd_check_badges(readme: PathBuf) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(&readme).await?;
    let badges = extract_badges(&content);

    if badges.is_empty() {
        return Err(anyhow::anyhow!("no badges found in {}", readme.display()));
    }

    let mut invalid = 0usize;
    for badge in &badges {
        if badge.is_valid() {
            println!("  OK       {} ({})", badge.label, badge.url);
        } else {
            invalid += 1;
            println!("  INVALID  {} ({})", badge.label, badge.url);
        }
    }

    if invalid > 0 {
        return Err(anyhow::anyhow!(
            "{} of {} badges in {} are malformed",
            invalid,
            badges.len(),
            readme.display()
        ));
    }

    println!("All {} badges valid", badges.len());
    Ok(())
}
