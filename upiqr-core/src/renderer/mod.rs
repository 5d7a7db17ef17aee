//! The boundary to the barcode encoder.
//!
//! A [`Renderer`] turns a string into a scannable artifact. The crate ships
//! [`QrCodeRenderer`]; anything else implementing the trait can be plugged
//! into [`UpiQr`](crate::UpiQr) instead.

mod color;
mod qr;

pub use color::parse_hex_color;
pub use qr::{
    DEFAULT_MARGIN, DEFAULT_SCALE, MAX_IMAGE_SIDE, MAX_SIDE_MODULES, QrCodeRenderer,
};

use async_trait::async_trait;
use thiserror::Error;
use upiqr_sdk::objects::{ErrorCorrectionLevel, ModuleColors, OutputType, RenderOptions};

/// Which entry point of the renderer to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// `data:image/png;base64,...`
    DataUrl,
    /// SVG markup.
    Svg,
    /// Block characters for terminals.
    Utf8,
}

impl From<OutputType> for RenderMode {
    fn from(output_type: OutputType) -> Self {
        match output_type {
            OutputType::VectorMarkup => RenderMode::Svg,
            OutputType::PlainText => RenderMode::Utf8,
            OutputType::EmbeddedImage => RenderMode::DataUrl,
        }
    }
}

/// The options bag handed to a renderer alongside the data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RendererOptions {
    pub margin: Option<u32>,
    pub width: Option<u32>,
    pub color: Option<ModuleColors>,
    pub error_correction_level: ErrorCorrectionLevel,
}

impl From<&RenderOptions> for RendererOptions {
    fn from(options: &RenderOptions) -> Self {
        Self {
            margin: options.margin,
            width: options.width,
            color: options.color.clone(),
            error_correction_level: options.error_correction_level.unwrap_or_default(),
        }
    }
}

/// Errors a renderer can report.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("{0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),

    /// Margin pushes the code past `MAX_SIDE_MODULES`.
    #[error("margin too large: {0} modules")]
    MarginTooLarge(u32),

    #[error("image too large: {0} pixels across")]
    ImageTooLarge(u64),

    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Failure reported by a renderer outside this crate.
    #[error("{0}")]
    Custom(String),
}

/// Capability to render a string as a scannable code.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Render `data` in the requested `mode`.
    async fn render(
        &self,
        data: &str,
        mode: RenderMode,
        options: &RendererOptions,
    ) -> Result<String, RendererError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_dispatch() {
        assert_eq!(RenderMode::from(OutputType::VectorMarkup), RenderMode::Svg);
        assert_eq!(RenderMode::from(OutputType::PlainText), RenderMode::Utf8);
        assert_eq!(
            RenderMode::from(OutputType::from_name("webp")),
            RenderMode::DataUrl
        );
    }

    #[test]
    fn test_options_default_error_correction() {
        let options = RendererOptions::from(&RenderOptions {
            margin: Some(1),
            ..Default::default()
        });
        assert_eq!(options.error_correction_level, ErrorCorrectionLevel::M);
        assert_eq!(options.margin, Some(1));
        assert!(options.width.is_none());

        let options = RendererOptions::from(&RenderOptions {
            error_correction_level: Some(ErrorCorrectionLevel::H),
            ..Default::default()
        });
        assert_eq!(options.error_correction_level, ErrorCorrectionLevel::H);
    }
}
