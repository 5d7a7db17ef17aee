//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;
use upiqr_sdk::intent::{IntentError, parse_amount};
use upiqr_sdk::objects::{
    ErrorCorrectionLevel, ModuleColors, OutputType, PaymentParameters, RenderOptions,
};

/// Generate UPI payment QR codes
#[derive(Parser, Debug)]
#[command(name = "upiqr")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML configuration file [default: ./upiqr.toml, if present]
    #[arg(short, long, env = "UPIQR_CONFIG")]
    pub config: Option<PathBuf>,

    /// UPI ID (virtual payment address) of the payee, e.g. user@bank
    #[arg(long)]
    pub upi_id: Option<String>,

    /// Registered name of the payee
    #[arg(long)]
    pub name: Option<String>,

    /// Amount to pay
    #[arg(long)]
    pub amount: Option<String>,

    /// Minimum amount that can be paid
    #[arg(long)]
    pub minimum_amount: Option<String>,

    /// Currency code
    #[arg(long)]
    pub currency: Option<String>,

    /// Merchant category code
    #[arg(long)]
    pub merchant_code: Option<String>,

    #[arg(long)]
    pub transaction_id: Option<String>,

    /// Transaction reference, e.g. an invoice number
    #[arg(long)]
    pub transaction_ref: Option<String>,

    /// Note shown to the payer
    #[arg(long)]
    pub note: Option<String>,

    /// Output format: dataURL, svg or utf8
    #[arg(short, long)]
    pub output_type: Option<OutputType>,

    /// Quiet zone width in modules
    #[arg(long)]
    pub margin: Option<u32>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Color of dark modules, as hex
    #[arg(long)]
    pub dark: Option<String>,

    /// Color of light modules, as hex
    #[arg(long)]
    pub light: Option<String>,

    /// Error correction level: L, M, Q or H
    #[arg(long)]
    pub ecl: Option<ErrorCorrectionLevel>,

    /// Print only the intent URI, without rendering
    #[arg(long, conflicts_with = "json")]
    pub intent_only: bool,

    /// Print the result as JSON with both the artifact and the intent
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Payment parameters given on the command line.
    pub fn payment_overrides(&self) -> Result<PaymentParameters, IntentError> {
        Ok(PaymentParameters {
            upi_id: self.upi_id.clone(),
            name: self.name.clone(),
            payee_merchant_code: self.merchant_code.clone(),
            transaction_id: self.transaction_id.clone(),
            transaction_ref: self.transaction_ref.clone(),
            transaction_note: self.note.clone(),
            amount: self.amount.as_deref().map(parse_amount).transpose()?,
            minimum_amount: self
                .minimum_amount
                .as_deref()
                .map(parse_amount)
                .transpose()?,
            currency: self.currency.clone(),
        })
    }

    /// Render options given on the command line.
    pub fn render_overrides(&self) -> RenderOptions {
        let color = (self.dark.is_some() || self.light.is_some()).then(|| ModuleColors {
            dark: self.dark.clone(),
            light: self.light.clone(),
        });

        RenderOptions {
            output_type: self.output_type,
            margin: self.margin,
            width: self.width,
            color,
            error_correction_level: self.ecl,
        }
    }
}
