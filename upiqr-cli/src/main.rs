//! UPI QR command-line tool
//!
//! Builds a UPI payment intent from a config file and flags, then prints the
//! rendered QR code, the intent, or both as JSON.

mod cli;
mod config;

use clap::Parser;
use cli::Args;
use config::ConfigLoader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use upiqr_core::UpiQr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let file_config = ConfigLoader::new(args.config.as_deref())
        .load()
        .map_err(|e| {
            tracing::error!("Failed to load configuration: {}", e);
            e
        })?;

    // File first, then flags
    let mut qr = UpiQr::new();
    qr.set(file_config.payment)
        .set_options(file_config.render)
        .set(args.payment_overrides()?)
        .set_options(args.render_overrides());

    if args.intent_only {
        println!("{}", qr.intent()?);
        return Ok(());
    }

    let result = qr.generate().await?;
    tracing::info!(intent = %result.intent, "QR code generated");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.qr);
    }

    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so stdout carries only the artifact.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
