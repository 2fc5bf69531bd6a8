//! Main application model with state management

use tokio::sync::Mutex;
use tokio::sync::watch;

use super::content::{ContentState, ContentView, FailedRequest, LyricsResult, SearchResponse, SongRef};
use super::favorites::FavoriteEntry;
use super::types::{ActiveSection, UiState};
use crate::view::display::split_lines;

/// Main application model containing all state
pub struct AppModel {
    pub ui_state: Mutex<UiState>,
    pub content_state: Mutex<ContentState>,
    pub should_quit: Mutex<bool>,
    favorites: watch::Receiver<Vec<FavoriteEntry>>,
}

impl AppModel {
    pub fn new(favorites: watch::Receiver<Vec<FavoriteEntry>>) -> Self {
        Self {
            ui_state: Mutex::new(UiState::default()),
            content_state: Mutex::new(ContentState::default()),
            should_quit: Mutex::new(false),
            favorites,
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        self.ui_state.lock().await.active_section = section;
    }

    pub async fn search_query(&self) -> String {
        self.ui_state.lock().await.search_query.clone()
    }

    pub async fn update_search_query(&self, query: String) {
        self.ui_state.lock().await.search_query = query;
    }

    pub async fn append_to_search(&self, c: char) {
        self.ui_state.lock().await.search_query.push(c);
    }

    pub async fn backspace_search(&self) {
        self.ui_state.lock().await.search_query.pop();
    }

    pub async fn set_warning(&self, message: impl Into<String>) {
        self.ui_state.lock().await.warning_message = Some(message.into());
    }

    pub async fn clear_warning(&self) {
        self.ui_state.lock().await.warning_message = None;
    }

    pub async fn has_warning(&self) -> bool {
        self.ui_state.lock().await.warning_message.is_some()
    }

    pub async fn show_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    // ========================================================================
    // Favorites
    // ========================================================================

    /// Latest collection published by the favorites store
    pub fn get_favorites(&self) -> Vec<FavoriteEntry> {
        self.favorites.borrow().clone()
    }

    pub async fn favorite_move_up(&self) {
        let mut state = self.ui_state.lock().await;
        state.favorite_selected = state.favorite_selected.saturating_sub(1);
    }

    pub async fn favorite_move_down(&self) {
        let count = self.favorites.borrow().len();
        let mut state = self.ui_state.lock().await;
        if state.favorite_selected < count.saturating_sub(1) {
            state.favorite_selected += 1;
        }
    }

    /// Keeps the favorites cursor inside the list after it shrinks
    pub async fn clamp_favorite_selection(&self) {
        let count = self.favorites.borrow().len();
        let mut state = self.ui_state.lock().await;
        state.favorite_selected = state.favorite_selected.min(count.saturating_sub(1));
    }

    // ========================================================================
    // Results area
    // ========================================================================

    pub async fn get_content_state(&self) -> ContentState {
        self.content_state.lock().await.clone()
    }

    pub async fn set_loading(&self, loading: bool) {
        self.content_state.lock().await.is_loading = loading;
    }

    pub async fn is_loading(&self) -> bool {
        self.content_state.lock().await.is_loading
    }

    pub async fn set_search_results(&self, response: SearchResponse) {
        self.content_state.lock().await.view = ContentView::SearchResults {
            response,
            selected_index: 0,
        };
    }

    pub async fn set_lyrics(&self, song: SongRef, lyrics: LyricsResult) {
        self.content_state.lock().await.view = ContentView::Lyrics {
            song,
            lyrics,
            scroll: 0,
        };
    }

    pub async fn set_failed(&self, request: FailedRequest) {
        self.content_state.lock().await.view = ContentView::Failed(request);
    }

    pub async fn show_placeholder(&self) {
        self.content_state.lock().await.view = ContentView::Placeholder;
    }

    pub async fn content_move_up(&self) {
        let mut state = self.content_state.lock().await;
        match &mut state.view {
            ContentView::SearchResults { selected_index, .. } => {
                *selected_index = selected_index.saturating_sub(1);
            }
            ContentView::Lyrics { scroll, .. } => {
                *scroll = scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    pub async fn content_move_down(&self) {
        let mut state = self.content_state.lock().await;
        match &mut state.view {
            ContentView::SearchResults { response, selected_index } => {
                if *selected_index < response.data.len().saturating_sub(1) {
                    *selected_index += 1;
                }
            }
            ContentView::Lyrics { lyrics: LyricsResult::Found { lyrics }, scroll, .. } => {
                let max_scroll = u16::try_from(split_lines(lyrics).len()).unwrap_or(u16::MAX);
                if *scroll < max_scroll {
                    *scroll += 1;
                }
            }
            _ => {}
        }
    }
}
