//! The configuration accumulator and QR generation entry point.

use crate::error::Error;
use crate::renderer::{QrCodeRenderer, RenderMode, Renderer, RendererOptions};
use tracing::{debug, warn};
use upiqr_sdk::intent::build_intent;
use upiqr_sdk::objects::{PaymentParameters, RenderOptions, UpiConfig, UpiQrResult};

/// Accumulates payment parameters and render options, then generates a UPI
/// QR code from them.
///
/// Starts from [`UpiConfig::default`] (`INR`, embedded image). Updates are
/// merged field by field and nothing is validated until [`intent`] or
/// [`generate`] is called. Fields can be overwritten but never unset.
///
/// Mutation takes `&mut self`, so interleaving updates with an in-flight
/// [`generate`] on the same instance is ruled out at compile time. Use one
/// instance per payment request.
///
/// [`intent`]: UpiQr::intent
/// [`generate`]: UpiQr::generate
#[derive(Debug, Clone)]
pub struct UpiQr<R = QrCodeRenderer> {
    config: UpiConfig,
    renderer: R,
}

impl UpiQr<QrCodeRenderer> {
    /// Create an accumulator backed by [`QrCodeRenderer`].
    pub fn new() -> Self {
        Self::with_renderer(QrCodeRenderer)
    }
}

impl Default for UpiQr<QrCodeRenderer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Renderer> UpiQr<R> {
    /// Create an accumulator that renders through `renderer`.
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            config: UpiConfig::default(),
            renderer,
        }
    }

    /// Merge payment parameters into the configuration.
    pub fn set(&mut self, params: PaymentParameters) -> &mut Self {
        self.config.payment.merge(params);
        self
    }

    /// Merge render options into the configuration.
    pub fn set_options(&mut self, options: RenderOptions) -> &mut Self {
        self.config.render.merge(options);
        self
    }

    /// The configuration accumulated so far.
    pub fn config(&self) -> &UpiConfig {
        &self.config
    }

    /// Validate the configuration and build the `upi://pay` intent URI.
    pub fn intent(&self) -> Result<String, Error> {
        Ok(build_intent(&self.config.payment)?)
    }

    /// Validate, build the intent and render it.
    ///
    /// The renderer is never called when validation fails. A renderer
    /// failure is reported as [`Error::RenderFailure`] and not retried.
    pub async fn generate(&self) -> Result<UpiQrResult, Error> {
        let intent = self.intent()?;

        let output_type = self.config.render.output_type.unwrap_or_default();
        let mode = RenderMode::from(output_type);
        let options = RendererOptions::from(&self.config.render);
        debug!(output_type = output_type.as_str(), "Rendering UPI QR code");

        match self.renderer.render(&intent, mode, &options).await {
            Ok(qr) => Ok(UpiQrResult { qr, intent }),
            Err(e) => {
                warn!(error = %e, "Failed to render UPI QR code");
                Err(Error::RenderFailure(e.to_string()))
            }
        }
    }
}
