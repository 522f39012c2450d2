use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id_middleware;

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health_check))
        // Wardrobe
        .route("/clothes", post(handlers::create_item))
        .route("/clothes", get(handlers::list_items))
        .route("/clothes/:id", get(handlers::get_item))
        .route("/clothes/:id", delete(handlers::delete_item))
        .route("/clothes/:id/wear", patch(handlers::wear_item))
        // Outfits
        .route("/outfit/matrix", get(handlers::outfit_matrix))
        .route("/outfit/suggest", get(handlers::suggest_outfit))
        .route("/outfit/save", post(handlers::save_outfit))
        .route("/outfit/saved", get(handlers::saved_outfits));

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
