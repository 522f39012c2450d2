//! Random single-outfit suggestion, the lightweight sibling of the full
//! generation engine: no color theory, just a seasonally coherent pick.

use rand::Rng;

use crate::models::{Category, ClothingItem, Season};

fn pick<'a, R: Rng + ?Sized>(items: &[&'a ClothingItem], rng: &mut R) -> &'a ClothingItem {
    items[rng.random_range(0..items.len())]
}

fn season_matches(item: &ClothingItem, selected: Option<Season>) -> bool {
    match selected {
        Some(season) => item.season == season || item.season == Season::All || season == Season::All,
        None => item.season == Season::All,
    }
}

/// Suggests one random outfit as a flat item list.
///
/// Base is either a full-body garment (50% chance when one exists) or a
/// random top+bottom pairing; shoes are matched to the base's declared
/// season when possible, and outerwear joins 30% of the time. The rng is
/// injected so callers (and tests) control determinism.
pub fn suggest_outfit<R: Rng + ?Sized>(wardrobe: &[ClothingItem], rng: &mut R) -> Vec<ClothingItem> {
    let tops: Vec<&ClothingItem> = wardrobe.iter().filter(|i| i.category == Category::Top).collect();
    let bottoms: Vec<&ClothingItem> =
        wardrobe.iter().filter(|i| i.category == Category::Bottom).collect();
    let full_body: Vec<&ClothingItem> =
        wardrobe.iter().filter(|i| i.category == Category::FullBody).collect();
    let shoes: Vec<&ClothingItem> =
        wardrobe.iter().filter(|i| i.category == Category::Shoes).collect();
    let outerwear: Vec<&ClothingItem> =
        wardrobe.iter().filter(|i| i.category == Category::Outerwear).collect();

    let mut outfit: Vec<ClothingItem> = Vec::new();
    let mut selected_season: Option<Season> = None;

    let use_full_body = !full_body.is_empty() && rng.random::<f64>() > 0.5;

    if use_full_body {
        let selected = pick(&full_body, rng);
        selected_season = Some(selected.season);
        outfit.push(selected.clone());
    } else if !tops.is_empty() && !bottoms.is_empty() {
        let top = pick(&tops, rng);
        let bottom = pick(&bottoms, rng);
        // Prefer a concrete season over "All" when labeling the outfit
        selected_season = Some(if top.season != Season::All {
            top.season
        } else {
            bottom.season
        });
        outfit.push(top.clone());
        outfit.push(bottom.clone());
    } else if !tops.is_empty() {
        let top = pick(&tops, rng);
        selected_season = Some(top.season);
        outfit.push(top.clone());
    } else if !bottoms.is_empty() {
        let bottom = pick(&bottoms, rng);
        selected_season = Some(bottom.season);
        outfit.push(bottom.clone());
    } else if !full_body.is_empty() {
        let selected = pick(&full_body, rng);
        selected_season = Some(selected.season);
        outfit.push(selected.clone());
    }

    if !shoes.is_empty() {
        let matching: Vec<&ClothingItem> = shoes
            .iter()
            .copied()
            .filter(|shoe| season_matches(shoe, selected_season))
            .collect();
        let pool = if matching.is_empty() { &shoes } else { &matching };
        outfit.push(pick(pool, rng).clone());
    }

    if !outerwear.is_empty() && rng.random::<f64>() > 0.7 {
        let matching: Vec<&ClothingItem> = outerwear
            .iter()
            .copied()
            .filter(|layer| season_matches(layer, selected_season))
            .collect();
        let pool = if matching.is_empty() { &outerwear } else { &matching };
        outfit.push(pick(pool, rng).clone());
    }

    outfit
}
