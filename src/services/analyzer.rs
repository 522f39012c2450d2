//! One-shot item analysis run at upload time.
//!
//! Everything here is ordered, first-match-wins substring matching over the
//! lower-cased item name. The tables are evaluated in sequence; precedence
//! is part of the contract (e.g. "lightweight jacket" scores as summer
//! because "light" is checked before "jacket").

use std::path::Path;

use crate::models::{AnalysisResult, Category, Formality};
use crate::services::color;

const FORMAL_KEYWORDS: [&str; 8] = [
    "suit",
    "blazer",
    "dress shirt",
    "oxford",
    "tie",
    "formal",
    "tuxedo",
    "evening",
];

const SMART_CASUAL_KEYWORDS: [&str; 7] = [
    "chinos", "polo", "loafer", "chelsea", "button", "cardigan", "khaki",
];

const SUMMER_MATERIALS: [&str; 8] = [
    "linen", "cotton", "sheer", "tank", "shorts", "sandal", "flip", "light",
];

const WINTER_MATERIALS: [&str; 11] = [
    "wool", "fleece", "leather", "coat", "jacket", "boot", "sweater", "knit", "thermal", "puffer",
    "heavy",
];

/// Garment subtype detection table, checked in order. The Dress entry is
/// additionally gated on the Full-body category below.
const TYPE_KEYWORDS: [(&[&str], &str); 8] = [
    (&["t-shirt", "tee"], "T-shirt"),
    (&["jeans"], "Jeans"),
    (&["chinos"], "Chinos"),
    (&["dress"], "Dress"),
    (&["sneaker", "trainer"], "Sneakers"),
    (&["boot"], "Boots"),
    (&["blazer"], "Blazer"),
    (&["jacket"], "Jacket"),
];

/// Derives the formality level from the item name
pub fn detect_formality(item_name: &str) -> Formality {
    let name = item_name.to_lowercase();

    if FORMAL_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        return Formality::Formal;
    }

    if SMART_CASUAL_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        return Formality::SmartCasual;
    }

    Formality::Casual
}

/// Scores how summer- (0) vs winter- (10) appropriate a garment reads
pub fn classify_seasonality(item_name: &str, category: Category) -> u8 {
    let name = item_name.to_lowercase();

    if SUMMER_MATERIALS.iter().any(|kw| name.contains(kw)) {
        return 2;
    }

    if WINTER_MATERIALS.iter().any(|kw| name.contains(kw)) {
        return 8;
    }

    match category {
        Category::Outerwear => 7,
        Category::Shoes => 5,
        _ => 5,
    }
}

/// Detects the specific garment subtype, falling back to the category label
pub fn detect_garment_type(item_name: &str, category: Category) -> String {
    let name = item_name.to_lowercase();

    for (keywords, garment_type) in TYPE_KEYWORDS {
        // The dress rule only applies to full-body garments; a "dress shirt"
        // top falls through to later rules
        if garment_type == "Dress" && category != Category::FullBody {
            continue;
        }
        if keywords.iter().any(|kw| name.contains(kw)) {
            return garment_type.to_string();
        }
    }

    category.as_str().to_string()
}

/// Analyzes a single clothing item: dominant color plus keyword-derived
/// attributes. Runs once at item creation.
///
/// Returns `None` only when the analysis task itself fails; color extraction
/// failures are absorbed into the neutral gray fallback so an upload never
/// fails on a bad image.
pub async fn analyze_clothing_image(
    image_path: Option<&str>,
    item_name: &str,
    category: Category,
) -> Option<AnalysisResult> {
    let color_data = match image_path {
        Some(path) => {
            let path = path.to_string();
            // Image decode is CPU-bound; keep it off the async runtime
            let joined =
                tokio::task::spawn_blocking(move || color::extract_dominant_color(Path::new(&path)))
                    .await;
            match joined {
                Ok(data) => data,
                Err(error) => {
                    tracing::error!(error = %error, "Item analysis task failed");
                    return None;
                }
            }
        }
        None => color::ColorData::fallback(),
    };

    Some(AnalysisResult {
        color_hex: color_data.hex,
        color_family: color_data.family,
        formality: detect_formality(item_name),
        seasonality_score: classify_seasonality(item_name, category),
        detected_type: detect_garment_type(item_name, category),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorFamily;

    #[test]
    fn test_formality_formal_keywords() {
        assert_eq!(detect_formality("Navy Blazer"), Formality::Formal);
        assert_eq!(detect_formality("White Dress Shirt"), Formality::Formal);
        assert_eq!(detect_formality("TUXEDO Jacket"), Formality::Formal);
    }

    #[test]
    fn test_formality_formal_wins_over_smart_casual() {
        // "suit" is checked before "button"
        assert_eq!(detect_formality("Button-up Suit"), Formality::Formal);
    }

    #[test]
    fn test_formality_smart_casual_and_default() {
        assert_eq!(detect_formality("Beige Chinos"), Formality::SmartCasual);
        assert_eq!(detect_formality("Chelsea Boots"), Formality::SmartCasual);
        assert_eq!(detect_formality("Graphic Tee"), Formality::Casual);
    }

    #[test]
    fn test_formality_matches_substrings() {
        // Substring matching is literal: "tie" hides inside "tie-dye"
        assert_eq!(detect_formality("Tie-dye Shirt"), Formality::Formal);
    }

    #[test]
    fn test_seasonality_materials() {
        assert_eq!(classify_seasonality("Linen Shirt", Category::Top), 2);
        assert_eq!(classify_seasonality("Wool Sweater", Category::Top), 8);
        assert_eq!(classify_seasonality("Leather Chelsea Boots", Category::Shoes), 8);
    }

    #[test]
    fn test_seasonality_summer_checked_first() {
        // "light" matches before "jacket" can push it to winter
        assert_eq!(classify_seasonality("Lightweight Jacket", Category::Outerwear), 2);
        // "cotton" matches before "sweater"
        assert_eq!(classify_seasonality("Cotton Sweater", Category::Top), 2);
    }

    #[test]
    fn test_seasonality_category_defaults() {
        assert_eq!(classify_seasonality("Windbreaker", Category::Outerwear), 7);
        assert_eq!(classify_seasonality("Espadrilles", Category::Shoes), 5);
        assert_eq!(classify_seasonality("Plain Shirt", Category::Top), 5);
    }

    #[test]
    fn test_garment_type_detection() {
        assert_eq!(detect_garment_type("Graphic Tee", Category::Top), "T-shirt");
        assert_eq!(detect_garment_type("Slim Jeans", Category::Bottom), "Jeans");
        assert_eq!(detect_garment_type("Retro Trainers", Category::Shoes), "Sneakers");
        assert_eq!(detect_garment_type("Navy Blazer", Category::Top), "Blazer");
    }

    #[test]
    fn test_garment_type_dress_requires_full_body() {
        assert_eq!(detect_garment_type("Summer Dress", Category::FullBody), "Dress");
        // A "dress shirt" top is not a dress
        assert_eq!(detect_garment_type("Dress Shirt", Category::Top), "Top");
    }

    #[test]
    fn test_garment_type_falls_back_to_category() {
        assert_eq!(detect_garment_type("Mystery Garment", Category::Bottom), "Bottom");
    }

    #[test]
    fn test_analyzer_is_deterministic() {
        let name = "Leather Chelsea Boots";
        for _ in 0..3 {
            assert_eq!(detect_formality(name), Formality::SmartCasual);
            assert_eq!(classify_seasonality(name, Category::Shoes), 8);
            assert_eq!(detect_garment_type(name, Category::Shoes), "Boots");
        }
    }

    #[tokio::test]
    async fn test_analyze_without_image_uses_neutral_fallback() {
        let result = analyze_clothing_image(None, "Graphic Tee", Category::Top)
            .await
            .unwrap();
        assert_eq!(result.color_hex, "#808080");
        assert_eq!(result.color_family, ColorFamily::Neutrals);
        assert_eq!(result.detected_type, "T-shirt");
        assert_eq!(result.seasonality_score, 5);
    }

    #[tokio::test]
    async fn test_analyze_with_unreadable_image_still_succeeds() {
        let result = analyze_clothing_image(Some("/no/such/image.png"), "Wool Coat", Category::Outerwear)
            .await
            .unwrap();
        assert_eq!(result.color_hex, "#808080");
        assert_eq!(result.seasonality_score, 8);
    }
}
