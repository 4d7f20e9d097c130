use std::path::PathBuf;

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tarrytown_config::{Config, ConfigLoad, ConfigLoader, ConfigWarnings};
use tarrytown_server::{AppState, create_app, infra::telemetry};
use tracing::{info, warn};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "tarrytown-server")]
#[command(about = "Serves the Tarrytown home-video archive and its folder listings")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone, Default)]
struct ServeArgs {
    /// Path to a tarrytown.toml config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read environment overrides from this file instead of `./.env`
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Server port (overrides config and SERVER_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config and SERVER_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Directory holding the category folders (overrides config and ARCHIVE_ROOT)
    #[arg(long)]
    archive_root: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load and validate configuration, open the archive root, then exit
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::CheckConfig) => check_config(&cli.serve).await,
        None => run_server(&cli.serve).await,
    }
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &args.env_file {
        loader = loader.with_env_file(path);
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    apply_overrides(&mut config, args);

    telemetry::init_tracing();
    log_warnings(&warnings);

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    match &config.metadata.config_path {
        Some(path) => info!(path = %path.display(), "loaded config file"),
        None => info!("no config file found; using environment and defaults"),
    }

    Ok(config)
}

fn apply_overrides(config: &mut Config, args: &ServeArgs) {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }
    if let Some(root) = args.archive_root.clone() {
        config.archive.root = root;
    }
}

fn log_warnings(warnings: &ConfigWarnings) {
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }
}

async fn check_config(args: &ServeArgs) -> anyhow::Result<()> {
    let config = load_runtime_config(args)?;
    let state = AppState::new(config).await.context(
        "archive root is not accessible; check ARCHIVE_ROOT or [archive].root",
    )?;

    info!(
        root = %state.archive().path().display(),
        prefix = state.archive().public_prefix(),
        categories = ?state.archive().categories(),
        "configuration OK"
    );
    Ok(())
}

async fn run_server(args: &ServeArgs) -> anyhow::Result<()> {
    let config = load_runtime_config(args)?;
    let host = config.server.host.clone();
    let port = config.server.port;

    let state = AppState::new(config).await.context(
        "archive root is not accessible; check ARCHIVE_ROOT or [archive].root",
    )?;
    info!(
        root = %state.archive().path().display(),
        prefix = state.archive().public_prefix(),
        "serving video archive"
    );

    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    let addr = listener.local_addr().context("listener has no address")?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
