use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::RequestId;
use crate::models::{Category, ClothingItem, OutfitMatrix, SavedOutfit, Season, TargetSeason};
use crate::services::{analyzer, generator, suggest};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub item_name: String,
    pub category: Category,
    #[serde(default)]
    pub season: Season,
    pub image_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    pub category: Option<Category>,
    pub season: Option<Season>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixQuery {
    pub season: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveOutfitRequest {
    pub item_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct WearResponse {
    pub success: bool,
    pub last_worn_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct SavedOutfitResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub items: Vec<ClothingItem>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Add a clothing item to the wardrobe, analyzing its image when one is given
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequest>,
) -> AppResult<(StatusCode, Json<ClothingItem>)> {
    if request.item_name.trim().is_empty() {
        return Err(AppError::InvalidInput("Item name is required".to_string()));
    }

    let mut item = ClothingItem::new(
        request.item_name,
        request.category,
        request.season,
        request.image_path,
    );

    if let Some(analysis) = analyzer::analyze_clothing_image(
        item.image_path.as_deref(),
        &item.item_name,
        item.category,
    )
    .await
    {
        item.apply_analysis(analysis);
    }

    tracing::info!(
        item_id = %item.id,
        category = %item.category,
        analyzed = item.analyzed,
        "added wardrobe item"
    );

    let response = item.clone();

    let mut inner = state.inner.write().await;
    inner.items.push(item);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get wardrobe items, optionally filtered by category and season, newest first
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Json<Vec<ClothingItem>> {
    let inner = state.inner.read().await;
    let mut items: Vec<ClothingItem> = inner
        .items
        .iter()
        .filter(|item| query.category.is_none_or(|c| item.category == c))
        .filter(|item| query.season.is_none_or(|s| item.season == s))
        .cloned()
        .collect();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Json(items)
}

/// Get a single wardrobe item by ID
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ClothingItem>> {
    let inner = state.inner.read().await;
    let item = inner
        .items
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;
    Ok(Json(item.clone()))
}

/// Remove a wardrobe item
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let mut inner = state.inner.write().await;
    let position = inner
        .items
        .iter()
        .position(|item| item.id == id)
        .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;
    inner.items.remove(position);
    Ok(StatusCode::NO_CONTENT)
}

/// Mark an item as worn today
pub async fn wear_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<WearResponse>> {
    let mut inner = state.inner.write().await;
    let item = inner
        .items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

    let today = Utc::now().date_naive();
    item.last_worn_date = Some(today);

    Ok(Json(WearResponse {
        success: true,
        last_worn_date: today,
    }))
}

/// Build the full outfit matrix for the requested season
pub async fn outfit_matrix(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<MatrixQuery>,
) -> AppResult<Json<OutfitMatrix>> {
    let season = match query.season.as_deref() {
        Some("Winter") => TargetSeason::Winter,
        _ => TargetSeason::Summer,
    };

    let mut wardrobe = {
        let inner = state.inner.read().await;
        inner.items.clone()
    };

    if wardrobe.is_empty() {
        return Err(AppError::NotFound(
            "No clothes found. Please add some items first.".to_string(),
        ));
    }

    // Stable ordering keeps the matrix deterministic for a given wardrobe
    wardrobe.sort_by(|a, b| a.category.as_str().cmp(b.category.as_str()));

    tracing::info!(
        request_id = %request_id,
        season = %season,
        wardrobe_size = wardrobe.len(),
        "generating outfit matrix"
    );

    let matrix = generator::generate_outfits(&wardrobe, season);

    Ok(Json(matrix))
}

/// Pick a quick randomized outfit from the wardrobe
pub async fn suggest_outfit(
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let wardrobe = {
        let inner = state.inner.read().await;
        inner.items.clone()
    };

    if wardrobe.is_empty() {
        return Err(AppError::NotFound(
            "No clothes found. Please add some items first.".to_string(),
        ));
    }

    let mut rng = rand::rng();
    let outfit = suggest::suggest_outfit(&wardrobe, &mut rng);

    if outfit.is_empty() {
        return Err(AppError::NotFound(
            "Not enough items to create an outfit".to_string(),
        ));
    }

    Ok(Json(json!({ "outfit": outfit })))
}

/// Save a set of item IDs as an outfit
pub async fn save_outfit(
    State(state): State<AppState>,
    Json(request): Json<SaveOutfitRequest>,
) -> AppResult<(StatusCode, Json<SavedOutfit>)> {
    if request.item_ids.is_empty() {
        return Err(AppError::InvalidInput("Item IDs are required".to_string()));
    }

    let outfit = SavedOutfit::new(request.item_ids);
    let response = outfit.clone();

    let mut inner = state.inner.write().await;
    inner.saved_outfits.push(outfit);

    Ok((StatusCode::CREATED, Json(response)))
}

/// List saved outfits with their resolved items, newest first
pub async fn saved_outfits(State(state): State<AppState>) -> Json<Vec<SavedOutfitResponse>> {
    let inner = state.inner.read().await;
    let mut outfits: Vec<SavedOutfitResponse> = inner
        .saved_outfits
        .iter()
        .map(|saved| SavedOutfitResponse {
            id: saved.id,
            created_at: saved.created_at,
            items: saved
                .item_ids
                .iter()
                .filter_map(|item_id| inner.items.iter().find(|item| item.id == *item_id))
                .cloned()
                .collect(),
        })
        .collect();
    outfits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Json(outfits)
}
