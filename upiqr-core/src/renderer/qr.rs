//! Renderer backed by the `qrcode` crate.
//!
//! Drawing is left to `qrcode`'s own image, SVG and Unicode renderers, always
//! without their fixed quiet zone. The configurable margin is added around
//! the result here.

use super::color::parse_hex_color;
use super::{RenderMode, Renderer, RendererError, RendererOptions};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage, codecs::png::PngEncoder};
use qrcode::render::{svg, unicode::Dense1x2};
use qrcode::{EcLevel, QrCode};
use upiqr_sdk::objects::ErrorCorrectionLevel;

/// Quiet zone width in modules when none is given.
pub const DEFAULT_MARGIN: u32 = 4;

/// Pixels per module when no usable width is given.
pub const DEFAULT_SCALE: u32 = 4;

/// Upper bound on modules across, margin included.
pub const MAX_SIDE_MODULES: usize = 1024;

/// Upper bound on the PNG side length, in pixels.
pub const MAX_IMAGE_SIDE: u64 = 8192;

const DEFAULT_DARK: &str = "#000000ff";
const DEFAULT_LIGHT: &str = "#ffffffff";

/// Renders QR codes as PNG data URLs, SVG or Unicode text.
///
/// Encoding is CPU-bound and runs on tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrCodeRenderer;

#[async_trait]
impl Renderer for QrCodeRenderer {
    async fn render(
        &self,
        data: &str,
        mode: RenderMode,
        options: &RendererOptions,
    ) -> Result<String, RendererError> {
        let data = data.to_owned();
        let options = options.clone();
        tokio::task::spawn_blocking(move || render_blocking(&data, mode, &options)).await?
    }
}

/// Synchronous rendering, for callers without a runtime.
pub fn render_blocking(
    data: &str,
    mode: RenderMode,
    options: &RendererOptions,
) -> Result<String, RendererError> {
    let code = QrCode::with_error_correction_level(
        data.as_bytes(),
        ec_level(options.error_correction_level),
    )?;
    let layout = Layout::new(&code, options.margin.unwrap_or(DEFAULT_MARGIN))?;

    match mode {
        RenderMode::DataUrl => {
            let palette = Palette::from_options(options)?;
            render_data_url(&code, &layout, &palette, options.width)
        }
        RenderMode::Svg => {
            let palette = Palette::from_options(options)?;
            Ok(render_svg(&code, &layout, &palette, options.width))
        }
        RenderMode::Utf8 => Ok(render_utf8(&code, &layout)),
    }
}

fn ec_level(level: ErrorCorrectionLevel) -> EcLevel {
    match level {
        ErrorCorrectionLevel::L => EcLevel::L,
        ErrorCorrectionLevel::M => EcLevel::M,
        ErrorCorrectionLevel::Q => EcLevel::Q,
        ErrorCorrectionLevel::H => EcLevel::H,
    }
}

/// Side lengths in modules. `side` never exceeds [`MAX_SIDE_MODULES`].
struct Layout {
    margin: u32,
    side: u32,
}

impl Layout {
    fn new(code: &QrCode, margin: u32) -> Result<Self, RendererError> {
        let side = (margin as usize)
            .checked_mul(2)
            .and_then(|quiet| quiet.checked_add(code.width()))
            .filter(|side| *side <= MAX_SIDE_MODULES)
            .ok_or(RendererError::MarginTooLarge(margin))?;

        Ok(Self {
            margin,
            side: side as u32,
        })
    }

    /// Pixels per module for a requested image width.
    fn scale(&self, width: Option<u32>) -> u32 {
        match width {
            Some(width) if width >= self.side => width / self.side,
            _ => DEFAULT_SCALE,
        }
    }
}

struct Palette {
    dark: Rgba<u8>,
    light: Rgba<u8>,
}

impl Palette {
    fn from_options(options: &RendererOptions) -> Result<Self, RendererError> {
        let colors = options.color.as_ref();
        let dark = colors.and_then(|c| c.dark.as_deref()).unwrap_or(DEFAULT_DARK);
        let light = colors.and_then(|c| c.light.as_deref()).unwrap_or(DEFAULT_LIGHT);
        Ok(Self {
            dark: parse_hex_color(dark)?,
            light: parse_hex_color(light)?,
        })
    }
}

fn render_data_url(
    code: &QrCode,
    layout: &Layout,
    palette: &Palette,
    width: Option<u32>,
) -> Result<String, RendererError> {
    let scale = layout.scale(width);
    let pixels = u64::from(layout.side) * u64::from(scale);
    if pixels > MAX_IMAGE_SIDE {
        return Err(RendererError::ImageTooLarge(pixels));
    }
    let pixels = pixels as u32;

    let modules = code
        .render::<Rgba<u8>>()
        .quiet_zone(false)
        .module_dimensions(scale, scale)
        .dark_color(palette.dark)
        .light_color(palette.light)
        .build();

    let mut image = RgbaImage::from_pixel(pixels, pixels, palette.light);
    let offset = i64::from(layout.margin * scale);
    image::imageops::replace(&mut image, &modules, offset, offset);

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}

/// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
fn svg_hex(color: Rgba<u8>) -> String {
    match color {
        Rgba([r, g, b, 0xff]) => format!("#{r:02x}{g:02x}{b:02x}"),
        Rgba([r, g, b, a]) => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
    }
}

fn render_svg(code: &QrCode, layout: &Layout, palette: &Palette, width: Option<u32>) -> String {
    let light = svg_hex(palette.light);
    let dark = svg_hex(palette.dark);

    let modules = code
        .render::<svg::Color>()
        .quiet_zone(false)
        .module_dimensions(1, 1)
        .dark_color(svg::Color(&dark))
        .light_color(svg::Color(&light))
        .build();
    // Drop the XML prolog so the document can be nested.
    let modules = modules
        .find("<svg")
        .map_or(modules.as_str(), |start| &modules[start..]);

    let side = layout.side;
    let margin = layout.margin;
    let dimensions = match width {
        Some(width) => {
            let pixels = u64::from(side) * u64::from(layout.scale(Some(width)));
            format!(r#" width="{pixels}" height="{pixels}""#)
        }
        None => String::new(),
    };

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1"{dimensions} viewBox="0 0 {side} {side}" shape-rendering="crispEdges">"#,
            r#"<rect width="{side}" height="{side}" fill="{light}"/>"#,
            r#"<g transform="translate({margin} {margin})">{modules}</g>"#,
            "</svg>\n"
        ),
        dimensions = dimensions,
        side = side,
        light = light,
        margin = margin,
        modules = modules,
    )
}

/// Two module rows per line. Colors are not applied; the vertical margin is
/// rounded up to whole lines.
fn render_utf8(code: &QrCode, layout: &Layout) -> String {
    let modules = code.render::<Dense1x2>().quiet_zone(false).build();

    let margin = layout.margin as usize;
    let padding = " ".repeat(margin);
    let blank = " ".repeat(layout.side as usize);
    let blank_lines = margin.div_ceil(2);

    std::iter::repeat_n(blank.clone(), blank_lines)
        .chain(modules.lines().map(|line| format!("{padding}{line}{padding}")))
        .chain(std::iter::repeat_n(blank, blank_lines))
        .collect::<Vec<_>>()
        .join("\n")
}
