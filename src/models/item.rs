use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Garment category. Determines how an item is grouped during outfit
/// generation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Top,
    Bottom,
    #[serde(rename = "Full-body")]
    FullBody,
    Shoes,
    Outerwear,
}

impl Category {
    /// Wire/display label, matching the stored category strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "Top",
            Category::Bottom => "Bottom",
            Category::FullBody => "Full-body",
            Category::Shoes => "Shoes",
            Category::Outerwear => "Outerwear",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-declared season tag, independent of the computed seasonality score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Season {
    Summer,
    Winter,
    #[default]
    All,
}

/// Season a recommendation request targets. Unlike [`Season`] there is no
/// `All` here: a request is always for one concrete season.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TargetSeason {
    Summer,
    Winter,
}

impl TargetSeason {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetSeason::Summer => "Summer",
            TargetSeason::Winter => "Winter",
        }
    }
}

impl std::fmt::Display for TargetSeason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formality level derived from the item name
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Formality {
    #[default]
    Casual,
    #[serde(rename = "Smart-Casual")]
    SmartCasual,
    Formal,
}

/// Coarse stylistic bucket for a dominant color
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ColorFamily {
    Neutrals,
    Pastels,
    #[serde(rename = "Jewel Tones")]
    JewelTones,
    Neons,
    #[serde(rename = "Earth Tones")]
    EarthTones,
    #[serde(rename = "Warm Tones")]
    WarmTones,
    #[serde(rename = "Cool Tones")]
    CoolTones,
}

impl ColorFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFamily::Neutrals => "Neutrals",
            ColorFamily::Pastels => "Pastels",
            ColorFamily::JewelTones => "Jewel Tones",
            ColorFamily::Neons => "Neons",
            ColorFamily::EarthTones => "Earth Tones",
            ColorFamily::WarmTones => "Warm Tones",
            ColorFamily::CoolTones => "Cool Tones",
        }
    }
}

impl std::fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Results of the one-shot analysis performed when an item is created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub color_hex: String,
    pub color_family: ColorFamily,
    pub formality: Formality,
    pub seasonality_score: u8,
    pub detected_type: String,
}

/// A single clothing item in a user's wardrobe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingItem {
    pub id: Uuid,
    pub item_name: String,
    pub category: Category,
    /// User-declared season tag; may disagree with `seasonality_score`
    pub season: Season,
    pub image_path: Option<String>,
    /// Extracted dominant color; absent when color analysis never ran
    pub color_hex: Option<String>,
    pub color_family: Option<ColorFamily>,
    pub formality: Formality,
    /// 0 = purely summer, 10 = purely winter, 5 = all-season
    pub seasonality_score: u8,
    /// Specific garment subtype; falls back to the category label
    pub detected_type: String,
    /// False when per-item analysis failed and derived fields hold defaults
    pub analyzed: bool,
    pub last_worn_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl ClothingItem {
    /// Creates an unanalyzed item with default derived attributes
    pub fn new(
        item_name: String,
        category: Category,
        season: Season,
        image_path: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_name,
            detected_type: category.as_str().to_string(),
            category,
            season,
            image_path,
            color_hex: None,
            color_family: None,
            formality: Formality::Casual,
            seasonality_score: 5,
            analyzed: false,
            last_worn_date: None,
            created_at: Utc::now(),
        }
    }

    /// Stores analysis results permanently on the item
    pub fn apply_analysis(&mut self, analysis: AnalysisResult) {
        self.color_hex = Some(analysis.color_hex);
        self.color_family = Some(analysis.color_family);
        self.formality = analysis.formality;
        self.seasonality_score = analysis.seasonality_score;
        self.detected_type = analysis.detected_type;
        self.analyzed = true;
    }
}
