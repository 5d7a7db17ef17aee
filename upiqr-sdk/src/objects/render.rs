use super::overwrite;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// The artifact representation requested from the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum OutputType {
    /// Base64 PNG wrapped in a `data:` URL.
    #[default]
    #[serde(rename = "dataURL")]
    EmbeddedImage,
    /// SVG document.
    #[serde(rename = "svg")]
    VectorMarkup,
    /// Unicode block characters for terminals.
    #[serde(rename = "utf8")]
    PlainText,
}

impl OutputType {
    /// The wire name, as accepted in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::EmbeddedImage => "dataURL",
            OutputType::VectorMarkup => "svg",
            OutputType::PlainText => "utf8",
        }
    }

    /// Resolve an output type by name.
    ///
    /// Unrecognized names fall back to [`OutputType::EmbeddedImage`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "dataurl" | "embeddedimage" | "png" => OutputType::EmbeddedImage,
            "svg" | "vectormarkup" => OutputType::VectorMarkup,
            "utf8" | "plaintext" | "text" => OutputType::PlainText,
            _ => {
                tracing::warn!(
                    output_type = name,
                    "Unrecognized output type, using embedded image"
                );
                OutputType::EmbeddedImage
            }
        }
    }
}

impl From<String> for OutputType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl FromStr for OutputType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// Error correction level, passed through to the encoder unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ErrorCorrectionLevel {
    /// ~7% recovery.
    L,
    /// ~15% recovery.
    #[default]
    M,
    /// ~25% recovery.
    Q,
    /// ~30% recovery.
    H,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error correction level: {0:?}")]
pub struct UnknownErrorCorrectionLevel(pub String);

impl FromStr for ErrorCorrectionLevel {
    type Err = UnknownErrorCorrectionLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(ErrorCorrectionLevel::L),
            "m" | "medium" => Ok(ErrorCorrectionLevel::M),
            "q" | "quartile" => Ok(ErrorCorrectionLevel::Q),
            "h" | "high" => Ok(ErrorCorrectionLevel::H),
            _ => Err(UnknownErrorCorrectionLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for ErrorCorrectionLevel {
    type Error = UnknownErrorCorrectionLevel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Module colors as hex strings (`#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
}

/// Visual options forwarded to the renderer.
///
/// Like [`PaymentParameters`](super::PaymentParameters), every field is
/// optional and `None` means "not supplied". Unset fields fall back to the
/// renderer's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_type: Option<OutputType>,
    /// Quiet zone width, in modules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<u32>,
    /// Target image width, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Replaced as a whole on merge; `dark` and `light` are not merged
    /// individually.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ModuleColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_correction_level: Option<ErrorCorrectionLevel>,
}

impl RenderOptions {
    /// Overwrite every field that `update` supplies, keeping the rest.
    pub fn merge(&mut self, update: RenderOptions) {
        let RenderOptions {
            output_type,
            margin,
            width,
            color,
            error_correction_level,
        } = update;

        overwrite(&mut self.output_type, output_type);
        overwrite(&mut self.margin, margin);
        overwrite(&mut self.width, width);
        overwrite(&mut self.color, color);
        overwrite(&mut self.error_correction_level, error_correction_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_type_names() {
        assert_eq!(OutputType::from_name("dataURL"), OutputType::EmbeddedImage);
        assert_eq!(OutputType::from_name("svg"), OutputType::VectorMarkup);
        assert_eq!(OutputType::from_name("UTF8"), OutputType::PlainText);
        assert_eq!(OutputType::from_name("gif"), OutputType::EmbeddedImage);
        assert_eq!(OutputType::VectorMarkup.as_str(), "svg");
    }

    #[test]
    fn test_output_type_serde() {
        let parsed: OutputType = serde_json::from_str(r#""utf8""#).unwrap();
        assert_eq!(parsed, OutputType::PlainText);
        let unknown: OutputType = serde_json::from_str(r#""bitmap""#).unwrap();
        assert_eq!(unknown, OutputType::EmbeddedImage);
        assert_eq!(
            serde_json::to_string(&OutputType::EmbeddedImage).unwrap(),
            r#""dataURL""#
        );
    }

    #[test]
    fn test_error_correction_level_parse() {
        assert_eq!("h".parse::<ErrorCorrectionLevel>(), Ok(ErrorCorrectionLevel::H));
        assert_eq!("Quartile".parse::<ErrorCorrectionLevel>(), Ok(ErrorCorrectionLevel::Q));
        assert_eq!(ErrorCorrectionLevel::default(), ErrorCorrectionLevel::M);
        assert_eq!(
            "X".parse::<ErrorCorrectionLevel>(),
            Err(UnknownErrorCorrectionLevel("X".to_string()))
        );
        assert!(serde_json::from_str::<ErrorCorrectionLevel>(r#""Z""#).is_err());
    }

    #[test]
    fn test_merge_replaces_color_wholesale() {
        let mut options = RenderOptions {
            color: Some(ModuleColors {
                dark: Some("#112233".to_string()),
                light: Some("#ffffff".to_string()),
            }),
            margin: Some(2),
            ..Default::default()
        };
        options.merge(RenderOptions {
            color: Some(ModuleColors {
                dark: Some("#000000".to_string()),
                light: None,
            }),
            ..Default::default()
        });

        let color = options.color.unwrap();
        assert_eq!(color.dark.as_deref(), Some("#000000"));
        assert!(color.light.is_none());
        assert_eq!(options.margin, Some(2));
    }
}
