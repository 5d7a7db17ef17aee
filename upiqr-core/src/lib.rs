#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod renderer;

pub use error::Error;
pub use generator::UpiQr;
pub use renderer::{QrCodeRenderer, RenderMode, Renderer, RendererError, RendererOptions};
pub use upiqr_sdk::objects::{
    ErrorCorrectionLevel, ModuleColors, OutputType, PaymentParameters, RenderOptions, UpiConfig,
    UpiQrResult,
};
