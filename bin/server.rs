// BMI Calculator - Web Server
// Serves the browser form and the JSON API

use anyhow::{Context, Result};
use bmi_calculator::{api, VERSION};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bmi-server", version = VERSION, about = "Web form for the BMI calculator")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:3000")]
    addr: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let listener = tokio::net::TcpListener::bind(&args.addr)
        .await
        .with_context(|| format!("Failed to bind to {}", args.addr))?;

    tracing::info!("BMI server v{} listening on http://{}", VERSION, args.addr);
    tracing::info!("API: POST http://{}/api/bmi", args.addr);

    axum::serve(listener, api::router())
        .await
        .context("Server error")?;

    Ok(())
}
