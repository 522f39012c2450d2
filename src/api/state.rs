use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{ClothingItem, SavedOutfit};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Inner state that can be modified
pub struct AppStateInner {
    /// Wardrobe items in insertion order
    pub items: Vec<ClothingItem>,
    pub saved_outfits: Vec<SavedOutfit>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new empty application state
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner {
                items: Vec::new(),
                saved_outfits: Vec::new(),
            })),
        }
    }
}
