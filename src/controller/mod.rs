//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! talks to the lyrics catalog and keeps the favorites store in sync with the model.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `search`: Search, paging and lyrics requests, live-typing debounce

mod input;
mod search;

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::config::AppConfig;
use crate::model::{AppModel, Catalog, Debouncer, FavoritesStore};
use crate::view::display::{self, Action, DisplayTree, ViewState};

pub const VALIDATION_WARNING: &str = "Please type in a search term";
pub const SAVE_FAILED_WARNING: &str = "Could not save favorites.";

pub struct AppController<C> {
    pub(crate) model: Arc<AppModel>,
    pub(crate) catalog: Arc<C>,
    pub(crate) favorites: FavoritesStore,
    debouncer: Arc<Debouncer>,
    min_live_query_len: usize,
}

impl<C> Clone for AppController<C> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            catalog: self.catalog.clone(),
            favorites: self.favorites.clone(),
            debouncer: self.debouncer.clone(),
            min_live_query_len: self.min_live_query_len,
        }
    }
}

impl<C: Catalog> AppController<C> {
    pub fn new(model: Arc<AppModel>, catalog: C, favorites: FavoritesStore, config: &AppConfig) -> Self {
        Self {
            model,
            catalog: Arc::new(catalog),
            favorites,
            debouncer: Arc::new(Debouncer::new(config.debounce_delay)),
            min_live_query_len: config.min_live_query_len,
        }
    }

    /// Renders the current state. Controls are read back from this tree so
    /// every action uses the exact references that were displayed.
    pub async fn display_tree(&self) -> DisplayTree {
        let content = self.model.get_content_state().await;
        let favorites = self.model.get_favorites();
        display::render(&ViewState {
            content: &content.view,
            favorites: &favorites,
            is_loading: content.is_loading,
        })
    }

    /// Performs a control's action. Network actions run on their own task,
    /// whose handle is returned.
    pub async fn dispatch(&self, action: Action) -> Option<JoinHandle<()>> {
        tracing::debug!(?action, "Dispatching action");
        match action {
            Action::ViewLyrics(song) => {
                let controller = self.clone();
                Some(tokio::spawn(async move {
                    controller.fetch_lyrics(song).await;
                }))
            }
            Action::FollowLink(url) => {
                let controller = self.clone();
                Some(tokio::spawn(async move {
                    controller.follow_link(&url).await;
                }))
            }
            Action::SaveFavorite(song) => {
                if let Err(e) = self.favorites.add(&song.artist, &song.title) {
                    tracing::error!(error = %e, artist = %song.artist, title = %song.title, "Failed to save favorite");
                    self.model.set_warning(SAVE_FAILED_WARNING).await;
                }
                None
            }
            Action::RemoveFavorite(index) => {
                if let Err(e) = self.favorites.remove_at(index) {
                    tracing::error!(error = %e, index, "Failed to remove favorite");
                    self.model.set_warning(SAVE_FAILED_WARNING).await;
                }
                self.model.clamp_favorite_selection().await;
                None
            }
            Action::BackToPlaceholder => {
                self.model.show_placeholder().await;
                None
            }
        }
    }
}
