//! Errors surfaced by [`UpiQr`](crate::UpiQr).

use thiserror::Error;
use upiqr_sdk::intent::IntentError;

#[derive(Debug, Error)]
pub enum Error {
    /// The configuration was rejected before anything was rendered.
    #[error(transparent)]
    Intent(#[from] IntentError),

    /// The renderer failed. Carries the renderer's message only, never the
    /// renderer's own error type.
    #[error("failed to generate QR code: {0}")]
    RenderFailure(String),
}
