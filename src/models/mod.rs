pub mod item;
pub mod outfit;

pub use item::{
    AnalysisResult, Category, ClothingItem, ColorFamily, Formality, Season, TargetSeason,
};
pub use outfit::{AnalysisEntry, OutfitItems, OutfitMatrix, OutfitRecommendation, SavedOutfit};
