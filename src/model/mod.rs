//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (focus sections, UI state)
//! - `content`: Catalog response types and the results area state
//! - `favorites`: Persistent favorites store and its backends
//! - `catalog_client`: Lyrics catalog API client
//! - `debounce`: Cancellable timers for live search
//! - `app_model`: Main application model with state management methods

mod types;
mod content;
mod favorites;
mod catalog_client;
mod debounce;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveSection, UiState};

pub use content::{ContentView, FailedRequest, LyricsResult, SearchResponse, SongRef};
#[cfg(test)]
pub use content::{ArtistRef, SongSummary};

pub use favorites::{FavoriteEntry, FavoritesStore, FileBackend};

pub use catalog_client::{Catalog, CatalogError, LyricsClient};

pub use debounce::Debouncer;

pub use app_model::AppModel;
