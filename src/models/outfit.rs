use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ClothingItem, TargetSeason};

/// Fixed-shape role bag for a generated outfit. Full-body items are not
/// represented here; the three generator strategies only dress the four
/// separate roles.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutfitItems {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<ClothingItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<ClothingItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoes: Option<ClothingItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outerwear: Option<ClothingItem>,
}

impl OutfitItems {
    /// Number of populated roles. An outfit needs at least two to be worth
    /// presenting.
    pub fn filled_roles(&self) -> usize {
        [
            self.top.is_some(),
            self.bottom.is_some(),
            self.shoes.is_some(),
            self.outerwear.is_some(),
        ]
        .iter()
        .filter(|&&present| present)
        .count()
    }
}

/// One generated outfit with its styling justification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutfitRecommendation {
    /// Season-qualified label, e.g. "Summer Safe Bet"
    pub outfit_name: String,
    /// Short label naming the heuristic used
    pub style_logic: String,
    pub season: TargetSeason,
    pub items: OutfitItems,
    /// Human-readable justification assembled from per-role decisions
    pub reasoning: String,
    /// Natural-language outfit description for downstream image generation
    pub visualization_prompt: String,
}

/// Informational summary row for one wardrobe item, emitted for every item
/// regardless of whether it passed the seasonal filter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisEntry {
    pub id: String,
    pub detected_name: String,
    pub category: String,
    pub color_family: String,
    pub season_suitability: TargetSeason,
}

/// Complete engine output: per-item analysis plus up to three outfits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutfitMatrix {
    pub analysis: Vec<AnalysisEntry>,
    pub recommendations: Vec<OutfitRecommendation>,
}

/// An outfit the user chose to keep, stored as a set of item ids
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedOutfit {
    pub id: Uuid,
    pub item_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl SavedOutfit {
    pub fn new(item_ids: Vec<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_ids,
            created_at: Utc::now(),
        }
    }
}
