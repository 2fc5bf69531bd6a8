//! View module - UI rendering
//!
//! Rendering happens in two steps. `display::render` turns model state into a
//! `DisplayTree` without touching the terminal; the remaining submodules draw
//! that tree with ratatui:
//!
//! - `display`: Pure state → display tree conversion
//! - `utils`: Shared helpers (literal text, truncation, scrollable lists)
//! - `layout`: Search bar, favorites sidebar, hint line
//! - `content`: Results area and page controls
//! - `overlays`: Modal overlays (warning, help)

pub mod display;
mod utils;
mod layout;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::UiState;
use display::DisplayTree;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, tree: &DisplayTree, ui_state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + loading indicator
                Constraint::Min(0),    // Results + favorites
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], ui_state, tree.loading);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(68), // Results
                Constraint::Percentage(32), // Favorites
            ])
            .split(chunks[1]);

        content::render_results(frame, main_chunks[0], tree, ui_state);
        layout::render_favorites(frame, main_chunks[1], &tree.favorites, ui_state);
        layout::render_hint_bar(frame, chunks[2], ui_state);

        if ui_state.warning_message.is_some() {
            overlays::render_warning_notification(frame, ui_state);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
