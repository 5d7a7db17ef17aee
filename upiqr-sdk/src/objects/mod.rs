pub mod payment;
pub mod render;
pub mod result;

pub use payment::PaymentParameters;
pub use render::{
    ErrorCorrectionLevel, ModuleColors, OutputType, RenderOptions, UnknownErrorCorrectionLevel,
};
pub use result::UpiQrResult;

use serde::{Deserialize, Serialize};

/// Currency used when none has been supplied.
pub const DEFAULT_CURRENCY: &str = "INR";

/// The accumulated payment and rendering configuration.
///
/// Serializes flat, with the same camelCase keys as the individual parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpiConfig {
    #[serde(flatten)]
    pub payment: PaymentParameters,
    #[serde(flatten)]
    pub render: RenderOptions,
}

impl Default for UpiConfig {
    /// Starts with `currency = "INR"` and the embedded-image output type.
    fn default() -> Self {
        Self {
            payment: PaymentParameters {
                currency: Some(DEFAULT_CURRENCY.to_string()),
                ..PaymentParameters::default()
            },
            render: RenderOptions {
                output_type: Some(OutputType::EmbeddedImage),
                ..RenderOptions::default()
            },
        }
    }
}

/// Replace `slot` only when an update value was supplied.
pub(crate) fn overwrite<T>(slot: &mut Option<T>, update: Option<T>) {
    if update.is_some() {
        *slot = update;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UpiConfig::default();
        assert_eq!(config.payment.currency.as_deref(), Some("INR"));
        assert_eq!(config.render.output_type, Some(OutputType::EmbeddedImage));
        assert!(config.payment.upi_id.is_none());
        assert!(config.render.error_correction_level.is_none());
    }

    #[test]
    fn test_config_serializes_flat() {
        let json = serde_json::to_value(UpiConfig::default()).unwrap();
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["outputType"], "dataURL");
        assert!(json.get("upiId").is_none());
    }

    #[test]
    fn test_config_deserializes_flat() {
        let json = r#"{"upiId":"user@bank","name":"Test User","outputType":"svg","margin":2}"#;
        let config: UpiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.payment.upi_id.as_deref(), Some("user@bank"));
        assert_eq!(config.payment.name.as_deref(), Some("Test User"));
        assert_eq!(config.render.output_type, Some(OutputType::VectorMarkup));
        assert_eq!(config.render.margin, Some(2));
    }
}
