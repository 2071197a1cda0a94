//! seatd — the SeatGrid daemon.
//!
//! Serves the seating planner over HTTP, or runs it once against a JSON
//! request file.
//!
//! # Usage
//!
//! ```text
//! seatd serve --config seatgrid.toml --port 5000
//! seatd plan --input request.json --format text
//! ```

mod plan;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use seatgrid_core::SeatgridConfig;
use seatgrid_core::config::LogConfig;
use tracing::info;

#[derive(Parser)]
#[command(name = "seatd", about = "SeatGrid seating planner", version)]
struct Cli {
    /// Path to seatgrid.toml. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API server.
    Serve {
        /// Address to bind (overrides [server].bind).
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on (overrides [server].port).
        #[arg(long)]
        port: Option<u16>,
    },
    /// Generate one plan from a JSON request file and print it.
    Plan {
        /// Request file with `guests`, `groups` and `tables_config`.
        #[arg(short, long)]
        input: PathBuf,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = SeatgridConfig::load(cli.config.as_deref())?;

    init_tracing(&config.log)?;

    match cli.command {
        Command::Serve { bind, port } => {
            let config = config.with_overrides(bind, port);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(serve(config))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Plan { input, format } => {
            let mut stdout = std::io::stdout().lock();
            let planned = plan::run(&input, format, &mut stdout)?;
            Ok(if planned { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(log: &LogConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log.filter))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

async fn serve(config: SeatgridConfig) -> anyhow::Result<()> {
    info!("SeatGrid daemon starting");

    let router = seatgrid_api::build_router(&config.cors);
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, "API server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_err() {
                // No signal handler; run until the process is killed.
                std::future::pending::<()>().await;
            }
            info!("shutdown signal received");
        })
        .await?;

    info!("SeatGrid daemon stopped");
    Ok(())
}
