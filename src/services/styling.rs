//! Color-theory and seasonal predicates used by the outfit generator.
//!
//! All color predicates work on hex strings and compare HSL hues in degrees.

use crate::models::ClothingItem;
use crate::services::color::hsl_components;

/// Neutral swatches recognized as outfit anchors. Deliberately a shorter
/// list than the classifier's swatch palette; the two have always diverged.
const ANCHOR_NEUTRALS: [&str; 11] = [
    "#000000", "#FFFFFF", "#F5F5DC", "#808080", "#000080", "#F5F5F0", "#E8E4DC", "#D4D0C8",
    "#A39B8B", "#3D3D3D", "#1A1A1A",
];

fn hue_of(hex: &str) -> f32 {
    hsl_components(hex).0
}

/// Checks whether two colors sit roughly opposite on the color wheel.
///
/// Known quirk: the hue difference is the literal numeric difference, not a
/// circular distance, so the [330,360] and [0,30] arms overlap the wheel
/// seam asymmetrically. Kept as-is for compatibility with existing outfit
/// output.
pub fn is_complementary(hex1: &str, hex2: &str) -> bool {
    let diff = (hue_of(hex1) - hue_of(hex2)).abs();
    (150.0..=210.0).contains(&diff) || diff >= 330.0 || diff <= 30.0
}

/// Checks whether two colors are adjacent on the color wheel
pub fn is_analogous(hex1: &str, hex2: &str) -> bool {
    let diff = (hue_of(hex1) - hue_of(hex2)).abs();
    diff <= 60.0 || diff >= 300.0
}

/// Checks whether all colors share roughly one hue. Needs at least two
/// colors; every hue must sit within 15 degrees of the first.
pub fn is_monochromatic(hex_colors: &[&str]) -> bool {
    if hex_colors.len() < 2 {
        return false;
    }

    let base_hue = hue_of(hex_colors[0]);
    hex_colors
        .iter()
        .all(|hex| (hue_of(hex) - base_hue).abs() <= 15.0)
}

/// Checks whether at least one color can act as a neutral anchor
pub fn has_neutral_anchor(hex_colors: &[&str]) -> bool {
    hex_colors.iter().any(|hex| {
        ANCHOR_NEUTRALS.contains(&hex.to_uppercase().as_str()) || hsl_components(hex).1 < 0.15
    })
}

/// Bottom silhouettes that balance a given top silhouette
fn compatible_bottoms(top_silhouette: &str) -> Option<&'static [&'static str]> {
    match top_silhouette {
        "Oversized" => Some(&["Slim", "Structured", "Fitted"]),
        "Fitted" => Some(&["Loose", "Wide", "Oversized", "Structured"]),
        "Loose" => Some(&["Fitted", "Slim", "Structured"]),
        "Structured" => Some(&["Slim", "Fitted", "Loose", "Oversized"]),
        "Slim" => Some(&["Oversized", "Loose", "Structured"]),
        _ => None,
    }
}

/// Checks whether top and bottom silhouettes balance each other.
/// Unspecified or unknown silhouettes are always allowed. Reserved for when
/// silhouette tagging lands; nothing in the generator calls this yet.
pub fn is_balanced_silhouette(top_silhouette: Option<&str>, bottom_silhouette: Option<&str>) -> bool {
    let (Some(top), Some(bottom)) = (top_silhouette, bottom_silhouette) else {
        return true;
    };

    match compatible_bottoms(top) {
        Some(bottoms) => bottoms.contains(&bottom),
        None => true,
    }
}

/// An item fits a summer request when its computed score reads summer-ish OR
/// the user declared it summer/all-season. The OR is deliberate: a user tag
/// always rescues an item the heuristic would exclude.
pub fn is_summer_appropriate(item: &ClothingItem) -> bool {
    use crate::models::Season;
    item.seasonality_score <= 6 || matches!(item.season, Season::Summer | Season::All)
}

/// Winter counterpart of [`is_summer_appropriate`]
pub fn is_winter_appropriate(item: &ClothingItem) -> bool {
    use crate::models::Season;
    item.seasonality_score >= 4 || matches!(item.season, Season::Winter | Season::All)
}

/// Harmony classification for a full outfit color set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Harmony {
    SingleColor,
    Monochromatic,
    Complementary,
    Analogous,
    Mixed,
}

impl Harmony {
    pub fn as_str(&self) -> &'static str {
        match self {
            Harmony::SingleColor => "Single Color",
            Harmony::Monochromatic => "Monochromatic",
            Harmony::Complementary => "Complementary",
            Harmony::Analogous => "Analogous",
            Harmony::Mixed => "Mixed",
        }
    }
}

impl std::fmt::Display for Harmony {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies an outfit's color set. Checked in order: monochromatic, then
/// any complementary pair, then all-consecutive-analogous, else mixed.
pub fn get_color_harmony_type(hex_colors: &[&str]) -> Harmony {
    if hex_colors.len() < 2 {
        return Harmony::SingleColor;
    }

    if is_monochromatic(hex_colors) {
        return Harmony::Monochromatic;
    }

    for (i, first) in hex_colors.iter().enumerate() {
        for second in &hex_colors[i + 1..] {
            if is_complementary(first, second) {
                return Harmony::Complementary;
            }
        }
    }

    let all_analogous = hex_colors
        .windows(2)
        .all(|pair| is_analogous(pair[0], pair[1]));
    if all_analogous {
        return Harmony::Analogous;
    }

    Harmony::Mixed
}
