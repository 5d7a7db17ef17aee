use super::RendererError;
use image::Rgba;

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`. The `#` is optional.
pub fn parse_hex_color(color: &str) -> Result<Rgba<u8>, RendererError> {
    let invalid = || RendererError::InvalidColor(color.to_string());

    let hex = color.strip_prefix('#').unwrap_or(color);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_string(),
        _ => return Err(invalid()),
    };

    let mut channels = [0xff_u8; 4];
    for (channel, pair) in channels.iter_mut().zip(expanded.as_bytes().chunks(2)) {
        let pair = std::str::from_utf8(pair).map_err(|_| invalid())?;
        *channel = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
    }

    Ok(Rgba(channels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_forms() {
        assert_eq!(parse_hex_color("#000000").unwrap(), Rgba([0, 0, 0, 255]));
        assert_eq!(
            parse_hex_color("#1a2B3c80").unwrap(),
            Rgba([0x1a, 0x2b, 0x3c, 0x80])
        );
        assert_eq!(
            parse_hex_color("ffffff").unwrap(),
            Rgba([255, 255, 255, 255])
        );
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!(
            parse_hex_color("#f0a").unwrap(),
            Rgba([0xff, 0x00, 0xaa, 0xff])
        );
        assert_eq!(
            parse_hex_color("#f0a8").unwrap(),
            Rgba([0xff, 0x00, 0xaa, 0x88])
        );
    }

    #[test]
    fn test_reject_malformed() {
        for bad in ["", "#", "#12", "#12345", "#gggggg", "red", "#1234567890"] {
            assert!(
                matches!(parse_hex_color(bad), Err(RendererError::InvalidColor(_))),
                "{bad} should be rejected"
            );
        }
    }
}
