//! The outfit generation engine ("Fashion Matrix").
//!
//! One invocation takes a wardrobe snapshot and a target season and produces
//! up to three structurally distinct outfits plus a per-item analysis
//! summary. The whole pass is pure, synchronous computation; the set of
//! already-used top+bottom pairings is threaded explicitly through the three
//! strategies and never outlives a single call.

use std::collections::HashSet;

use uuid::Uuid;

use crate::models::{
    AnalysisEntry, Category, ClothingItem, ColorFamily, OutfitItems, OutfitMatrix,
    OutfitRecommendation, TargetSeason,
};
use crate::services::color;
use crate::services::styling;

/// Ordered (top id, bottom id) pairing used for within-request deduplication
type PairKey = (Uuid, Uuid);

/// Generates up to three named outfits for the requested season.
///
/// Deduplication is pair-only: shoes and outerwear may repeat across
/// outfits. If no pairing can be built for a strategy that outfit is simply
/// omitted; an empty `recommendations` list is a valid result, not an error.
pub fn generate_outfits(wardrobe: &[ClothingItem], season: TargetSeason) -> OutfitMatrix {
    // An item passes on EITHER its computed score or its user-declared tag;
    // the user tag always rescues an item the heuristic would drop
    let seasonal: Vec<&ClothingItem> = wardrobe
        .iter()
        .filter(|item| match season {
            TargetSeason::Summer => styling::is_summer_appropriate(item),
            TargetSeason::Winter => styling::is_winter_appropriate(item),
        })
        .collect();

    let tops = by_category(&seasonal, Category::Top);
    let bottoms = by_category(&seasonal, Category::Bottom);
    let full_body = by_category(&seasonal, Category::FullBody);
    let shoes = by_category(&seasonal, Category::Shoes);
    let outerwear = by_category(&seasonal, Category::Outerwear);

    tracing::debug!(
        season = %season,
        wardrobe = wardrobe.len(),
        tops = tops.len(),
        bottoms = bottoms.len(),
        full_body = full_body.len(),
        shoes = shoes.len(),
        outerwear = outerwear.len(),
        "Seasonal filter applied"
    );

    let mut recommendations = Vec::new();
    let mut used_combinations: HashSet<PairKey> = HashSet::new();

    if let Some(outfit) = safe_bet(&tops, &bottoms, &shoes, &outerwear, season, &used_combinations)
    {
        mark_used(&mut used_combinations, &outfit);
        recommendations.push(outfit);
    }

    if let Some(outfit) =
        color_pop(&tops, &bottoms, &shoes, &outerwear, season, &used_combinations)
    {
        mark_used(&mut used_combinations, &outfit);
        recommendations.push(outfit);
    }

    if let Some(outfit) =
        trend_setter(&tops, &bottoms, &shoes, &outerwear, season, &used_combinations)
    {
        recommendations.push(outfit);
    }

    // Informational summary for every item of the unfiltered wardrobe; the
    // suitability column is just the requested season, not a filter result
    let analysis = wardrobe
        .iter()
        .map(|item| AnalysisEntry {
            id: format!("item_{}", item.id),
            detected_name: item.item_name.clone(),
            category: item.category.as_str().to_string(),
            color_family: item
                .color_family
                .map(|family| family.to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            season_suitability: season,
        })
        .collect();

    OutfitMatrix {
        analysis,
        recommendations,
    }
}

fn by_category<'a>(items: &[&'a ClothingItem], category: Category) -> Vec<&'a ClothingItem> {
    items
        .iter()
        .copied()
        .filter(|item| item.category == category)
        .collect()
}

fn mark_used(used: &mut HashSet<PairKey>, outfit: &OutfitRecommendation) {
    if let (Some(top), Some(bottom)) = (&outfit.items.top, &outfit.items.bottom) {
        used.insert((top.id, bottom.id));
    }
}

/// First top+bottom pairing not yet used by an earlier outfit, scanning tops
/// outer and bottoms inner
fn first_unused_pair<'a>(
    tops: &[&'a ClothingItem],
    bottoms: &[&'a ClothingItem],
    used: &HashSet<PairKey>,
) -> Option<(&'a ClothingItem, &'a ClothingItem)> {
    for top in tops {
        for bottom in bottoms {
            if !used.contains(&(top.id, bottom.id)) {
                return Some((top, bottom));
            }
        }
    }
    None
}

/// "Safe Bet": neutral colors and classic pairings
fn safe_bet(
    tops: &[&ClothingItem],
    bottoms: &[&ClothingItem],
    shoes: &[&ClothingItem],
    outerwear: &[&ClothingItem],
    season: TargetSeason,
    used: &HashSet<PairKey>,
) -> Option<OutfitRecommendation> {
    let neutral_tops: Vec<&ClothingItem> = tops
        .iter()
        .copied()
        .filter(|top| top.color_hex.as_deref().is_some_and(color::is_neutral))
        .collect();
    let neutral_bottoms: Vec<&ClothingItem> = bottoms
        .iter()
        .copied()
        .filter(|bottom| bottom.color_hex.as_deref().is_some_and(color::is_neutral))
        .collect();

    let mut selected = first_unused_pair(&neutral_tops, &neutral_bottoms, used).map(
        |(top, bottom)| {
            let clause = format!(
                "Neutral {} pairs safely with {}",
                top.item_name, bottom.item_name
            );
            (top, bottom, clause)
        },
    );

    if selected.is_none() {
        selected = first_unused_pair(tops, bottoms, used).map(|(top, bottom)| {
            let clause = format!(
                "Classic combination of {} with {}",
                top.item_name, bottom.item_name
            );
            (top, bottom, clause)
        });
    }

    let (top, bottom, clause) = selected?;

    let mut items = OutfitItems {
        top: Some(top.clone()),
        bottom: Some(bottom.clone()),
        ..Default::default()
    };
    let mut reasoning = vec![clause];

    if let Some(shoe) = shoes.first() {
        items.shoes = Some((*shoe).clone());
        reasoning.push(format!("{} completes the look", shoe.item_name));
    }

    if season == TargetSeason::Winter {
        if let Some(layer) = outerwear.first() {
            items.outerwear = Some((*layer).clone());
            reasoning.push(format!("{} keeps you warm", layer.item_name));
        }
    }

    if items.filled_roles() < 2 {
        return None;
    }

    let visualization_prompt = build_visualization_prompt(&items, season, "safe and neutral");

    Some(OutfitRecommendation {
        outfit_name: format!("{} Safe Bet", season),
        style_logic: "Neutral Color Scheme with Classic Silhouettes".to_string(),
        season,
        items,
        reasoning: join_reasoning(&reasoning),
        visualization_prompt,
    })
}

/// "Color Pop": complementary colors for high contrast
fn color_pop(
    tops: &[&ClothingItem],
    bottoms: &[&ClothingItem],
    shoes: &[&ClothingItem],
    outerwear: &[&ClothingItem],
    season: TargetSeason,
    used: &HashSet<PairKey>,
) -> Option<OutfitRecommendation> {
    let mut selected = None;

    'complementary: for top in tops {
        for bottom in bottoms {
            if used.contains(&(top.id, bottom.id)) {
                continue;
            }
            if let (Some(top_hex), Some(bottom_hex)) =
                (top.color_hex.as_deref(), bottom.color_hex.as_deref())
            {
                if styling::is_complementary(top_hex, bottom_hex) {
                    let clause = format!(
                        "Bold complementary pairing: {} and {} create high contrast",
                        top.item_name, bottom.item_name
                    );
                    selected = Some((*top, *bottom, clause));
                    break 'complementary;
                }
            }
        }
    }

    // Fall back to colorful items, then to anything unused
    if selected.is_none() && !tops.is_empty() && !bottoms.is_empty() {
        let colorful_tops: Vec<&ClothingItem> = tops
            .iter()
            .copied()
            .filter(|top| {
                top.color_family
                    .is_some_and(|family| family != ColorFamily::Neutrals)
            })
            .collect();
        let colorful_bottoms: Vec<&ClothingItem> = bottoms
            .iter()
            .copied()
            .filter(|bottom| {
                bottom
                    .color_family
                    .is_some_and(|family| family != ColorFamily::Neutrals)
            })
            .collect();

        let search_tops = if colorful_tops.is_empty() {
            tops
        } else {
            &colorful_tops
        };
        let search_bottoms = if colorful_bottoms.is_empty() {
            bottoms
        } else {
            &colorful_bottoms
        };

        selected = first_unused_pair(search_tops, search_bottoms, used).map(|(top, bottom)| {
            let clause = format!(
                "Colorful combination featuring {} and {}",
                top.item_name, bottom.item_name
            );
            (top, bottom, clause)
        });
    }

    let (top, bottom, clause) = selected?;

    let mut items = OutfitItems {
        top: Some(top.clone()),
        bottom: Some(bottom.clone()),
        ..Default::default()
    };
    let reasoning = vec![clause];

    // Second shoe option when the wardrobe has one, for variety
    if shoes.len() > 1 {
        items.shoes = Some(shoes[1].clone());
    } else if let Some(shoe) = shoes.first() {
        items.shoes = Some((*shoe).clone());
    }

    if season == TargetSeason::Winter {
        if let Some(layer) = outerwear.first() {
            items.outerwear = Some((*layer).clone());
        }
    }

    if items.filled_roles() < 2 {
        return None;
    }

    let visualization_prompt = build_visualization_prompt(&items, season, "bold and colorful");

    Some(OutfitRecommendation {
        outfit_name: format!("{} Color Pop", season),
        style_logic: "Complementary Color Theory for Bold Contrast".to_string(),
        season,
        items,
        reasoning: join_reasoning(&reasoning),
        visualization_prompt,
    })
}

/// "Trend Setter": monochromatic tones, or whatever pairing is left
fn trend_setter(
    tops: &[&ClothingItem],
    bottoms: &[&ClothingItem],
    shoes: &[&ClothingItem],
    outerwear: &[&ClothingItem],
    season: TargetSeason,
    used: &HashSet<PairKey>,
) -> Option<OutfitRecommendation> {
    let mut selected = None;

    for top in tops {
        let Some(top_hex) = top.color_hex.as_deref() else {
            continue;
        };
        let top_hue = color::hsl_components(top_hex).0;

        let matching_bottom = bottoms.iter().find(|bottom| {
            let Some(bottom_hex) = bottom.color_hex.as_deref() else {
                return false;
            };
            if used.contains(&(top.id, bottom.id)) {
                return false;
            }
            // Pairwise monochromatic check on the two hues directly
            let bottom_hue = color::hsl_components(bottom_hex).0;
            (top_hue - bottom_hue).abs() <= 15.0
        });

        if let Some(bottom) = matching_bottom {
            let clause = format!(
                "Monochromatic sophistication with {} and {} in similar tones",
                top.item_name, bottom.item_name
            );
            selected = Some((*top, *bottom, clause));
            break;
        }
    }

    if selected.is_none() {
        selected = first_unused_pair(tops, bottoms, used).map(|(top, bottom)| {
            let clause = format!(
                "Fashion-forward pairing of {} with {}",
                top.item_name, bottom.item_name
            );
            (top, bottom, clause)
        });
    }

    let (top, bottom, clause) = selected?;

    let mut items = OutfitItems {
        top: Some(top.clone()),
        bottom: Some(bottom.clone()),
        ..Default::default()
    };
    let reasoning = vec![clause];

    // Third shoe option when available
    if shoes.len() > 2 {
        items.shoes = Some(shoes[2].clone());
    } else if let Some(shoe) = shoes.first() {
        items.shoes = Some((*shoe).clone());
    }

    if season == TargetSeason::Winter {
        if let Some(layer) = outerwear.first() {
            items.outerwear = Some((*layer).clone());
        }
    }

    if items.filled_roles() < 2 {
        return None;
    }

    let visualization_prompt =
        build_visualization_prompt(&items, season, "trendy and sophisticated");

    Some(OutfitRecommendation {
        outfit_name: format!("{} Trend Setter", season),
        style_logic: "Monochromatic or High-Contrast Modern Styling".to_string(),
        season,
        items,
        reasoning: join_reasoning(&reasoning),
        visualization_prompt,
    })
}

fn join_reasoning(clauses: &[String]) -> String {
    format!("{}.", clauses.join(". "))
}

/// Color descriptor for the visualization prompt: family label, raw hex, or
/// the literal word "colored" when neither is known
fn garment_color(item: &ClothingItem) -> String {
    item.color_family
        .map(|family| family.to_string())
        .or_else(|| item.color_hex.clone())
        .unwrap_or_else(|| "colored".to_string())
}

/// Builds a natural-language outfit description for downstream
/// image-generation use
fn build_visualization_prompt(items: &OutfitItems, season: TargetSeason, vibe: &str) -> String {
    let mut description = format!(
        "A photorealistic shot of a fit male model standing against a clean white background, \
         wearing a {} {} outfit. ",
        vibe,
        season.as_str().to_lowercase()
    );

    let mut garments = Vec::new();

    if let Some(top) = &items.top {
        garments.push(format!("{} {}", garment_color(top), top.item_name));
    }
    if let Some(bottom) = &items.bottom {
        garments.push(format!("{} {}", garment_color(bottom), bottom.item_name));
    }
    if let Some(shoes) = &items.shoes {
        garments.push(shoes.item_name.clone());
    }
    if let Some(outerwear) = &items.outerwear {
        garments.push(format!("{} layered on top", outerwear.item_name));
    }

    description.push_str(&format!("He is wearing: {}. ", garments.join(", ")));

    let lighting = match season {
        TargetSeason::Summer => "bright and airy atmosphere",
        TargetSeason::Winter => "warm studio lighting",
    };
    description.push_str(&format!(
        "Commercial fashion photography, 8k resolution, sharp focus, professional lighting, {}.",
        lighting
    ));

    description
}
