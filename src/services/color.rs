//! Dominant color extraction and color family classification.
//!
//! Classification is a pure function of the input hex string: any input
//! produces exactly one of the seven family labels, with unparsable strings
//! degrading to black (hue/saturation/lightness all zero) instead of erroring.

use std::path::Path;

use palette::{FromColor, Hsl, Srgb};

use crate::models::ColorFamily;

/// Known neutral swatches, matched case-insensitively before any HSL check
const NEUTRAL_SWATCHES: [&str; 16] = [
    "#000000", "#FFFFFF", "#F5F5DC", "#808080", "#696969", "#A9A9A9", "#D3D3D3", "#DCDCDC",
    "#C0C0C0", "#000080", "#F5F5F0", "#E8E4DC", "#D4D0C8", "#A39B8B", "#3D3D3D", "#1A1A1A",
];

/// Substituted whenever color extraction fails; uploads must never fail on a
/// bad image
pub const FALLBACK_HEX: &str = "#808080";

/// Dominant color of an image with its derived family
#[derive(Debug, Clone, PartialEq)]
pub struct ColorData {
    pub hex: String,
    pub family: ColorFamily,
}

impl ColorData {
    /// Neutral gray fallback used when extraction fails
    pub fn fallback() -> Self {
        Self {
            hex: FALLBACK_HEX.to_string(),
            family: ColorFamily::Neutrals,
        }
    }
}

/// Parses a `#RRGGBB` hex string into sRGB components
pub(crate) fn parse_hex(hex: &str) -> Option<Srgb<f32>> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Srgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}

/// HSL components of a hex color: hue in degrees [0,360), saturation and
/// lightness in [0,1]. Unparsable input degrades to (0, 0, 0).
pub(crate) fn hsl_components(hex: &str) -> (f32, f32, f32) {
    match parse_hex(hex) {
        Some(srgb) => {
            let hsl = Hsl::from_color(srgb);
            (
                hsl.hue.into_positive_degrees(),
                hsl.saturation,
                hsl.lightness,
            )
        }
        None => (0.0, 0.0, 0.0),
    }
}

/// Checks whether a color reads as neutral: an exact swatch match or very
/// low saturation
pub fn is_neutral(hex: &str) -> bool {
    if NEUTRAL_SWATCHES.contains(&hex.to_uppercase().as_str()) {
        return true;
    }

    let (_, saturation, _) = hsl_components(hex);
    saturation < 0.15
}

/// Classifies a hex color into a coarse stylistic family.
///
/// Decision order matters: neutrality wins over everything, then the
/// lightness/saturation buckets, then the hue bands.
pub fn classify_color_family(hex: &str) -> ColorFamily {
    if is_neutral(hex) {
        return ColorFamily::Neutrals;
    }

    let (hue, saturation, lightness) = hsl_components(hex);

    if lightness > 0.85 {
        return ColorFamily::Pastels;
    }

    if lightness < 0.25 && saturation > 0.5 {
        return ColorFamily::JewelTones;
    }

    if saturation > 0.8 && lightness > 0.5 {
        return ColorFamily::Neons;
    }

    // Muted browns, tans and olives
    if ((20.0..=50.0).contains(&hue) || (60.0..=90.0).contains(&hue))
        && saturation < 0.6
        && lightness < 0.6
    {
        return ColorFamily::EarthTones;
    }

    match hue {
        h if h < 30.0 => ColorFamily::WarmTones,
        h if h < 90.0 => ColorFamily::EarthTones,
        h if h < 260.0 => ColorFamily::CoolTones,
        h if h < 330.0 => ColorFamily::JewelTones,
        _ => ColorFamily::WarmTones,
    }
}

/// Extracts the single most prevalent color from an image.
///
/// The image is downsampled, quantized to coarse RGB buckets and the mean
/// color of the fullest bucket wins. Any failure (missing file, undecodable
/// image) yields the neutral gray fallback rather than an error.
pub fn extract_dominant_color(path: &Path) -> ColorData {
    match sample_dominant_hex(path) {
        Ok(hex) => {
            let family = classify_color_family(&hex);
            ColorData { hex, family }
        }
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "Color extraction failed, using neutral fallback"
            );
            ColorData::fallback()
        }
    }
}

fn sample_dominant_hex(path: &Path) -> Result<String, image::ImageError> {
    use std::collections::HashMap;

    let thumb = image::open(path)?.thumbnail(64, 64).to_rgb8();

    // Quantize to 4 bits per channel so near-identical pixels share a bucket
    let mut buckets: HashMap<(u8, u8, u8), (u64, u64, u64, u64)> = HashMap::new();
    for pixel in thumb.pixels() {
        let [r, g, b] = pixel.0;
        let entry = buckets.entry((r >> 4, g >> 4, b >> 4)).or_default();
        entry.0 += 1;
        entry.1 += r as u64;
        entry.2 += g as u64;
        entry.3 += b as u64;
    }

    let (count, r_sum, g_sum, b_sum) = buckets
        .values()
        .max_by_key(|(count, ..)| *count)
        .copied()
        .unwrap_or((1, 128, 128, 128));

    Ok(format!(
        "#{:02X}{:02X}{:02X}",
        (r_sum / count) as u8,
        (g_sum / count) as u8,
        (b_sum / count) as u8
    ))
}
