//! TOML file configuration structures.
//!
//! These structs directly map to the `upiqr.toml` file format. Keys inside
//! the tables use the same camelCase names as the JSON representation.

use serde::{Deserialize, Serialize};
use upiqr_sdk::objects::{PaymentParameters, RenderOptions};

/// Root configuration structure as read from the TOML file.
///
/// Both tables are optional; anything left out can be supplied on the
/// command line instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub payment: PaymentParameters,
    pub render: RenderOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use upiqr_sdk::objects::{ErrorCorrectionLevel, OutputType};

    #[test]
    fn test_config_parsing() {
        let toml_str = r##"
[payment]
upiId = "shop@okaxis"
name = "Corner Shop"
payeeMerchantCode = "5411"
amount = "149.50"
transactionNote = "Groceries"

[render]
outputType = "svg"
margin = 2
width = 256
errorCorrectionLevel = "Q"

[render.color]
dark = "#1a1a1a"
"##;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.payment.upi_id.as_deref(), Some("shop@okaxis"));
        assert_eq!(config.payment.amount, Some(dec!(149.50)));
        assert!(config.payment.currency.is_none());
        assert_eq!(config.render.output_type, Some(OutputType::VectorMarkup));
        assert_eq!(config.render.margin, Some(2));
        assert_eq!(
            config.render.error_correction_level,
            Some(ErrorCorrectionLevel::Q)
        );
        let color = config.render.color.unwrap();
        assert_eq!(color.dark.as_deref(), Some("#1a1a1a"));
        assert!(color.light.is_none());
    }

    #[test]
    fn test_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_rejects_bad_error_correction_level() {
        let toml_str = r#"
[render]
errorCorrectionLevel = "Z"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }
}
