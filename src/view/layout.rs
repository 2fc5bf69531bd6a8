//! Layout rendering (search bar, favorites sidebar, hint line)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, UiState};
use super::display::FavoritesArea;
use super::utils::{literal, render_scrollable_list, truncate_string};

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState, loading: bool) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(14), // Loading indicator
        ])
        .split(area);

    let focused = ui_state.active_section == ActiveSection::Search;
    let search_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.search_query.is_empty() {
        "Search by song or artist...".to_string()
    } else if focused {
        format!("{}▏", ui_state.search_query)
    } else {
        ui_state.search_query.clone()
    };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1))
                .border_style(focus_style(focused)),
        );
    frame.render_widget(search, chunks[0]);

    let (status, status_style) = if loading {
        ("Loading...", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        ("", Style::default())
    };
    let indicator = Paragraph::new(status)
        .style(status_style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(indicator, chunks[1]);
}

pub fn render_favorites(frame: &mut Frame, area: Rect, favorites: &FavoritesArea, ui_state: &UiState) {
    let focused = ui_state.active_section == ActiveSection::Favorites;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Favorites ")
        .padding(Padding::horizontal(1))
        .border_style(focus_style(focused));

    if let Some(empty_message) = favorites.empty_message {
        let empty = Paragraph::new(empty_message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = favorites
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let selected = i == ui_state.favorite_selected;
            let style = if selected && focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let artist = literal(&row.artist);
            let title = truncate_string(
                &literal(&row.title),
                width.saturating_sub(artist.chars().count() + 3),
            );
            ListItem::new(Line::from(vec![
                Span::styled(artist, style.add_modifier(Modifier::BOLD)),
                Span::styled(format!(" - {}", title), style),
            ]))
        })
        .collect();

    render_scrollable_list(frame, area, items, ui_state.favorite_selected, block);
}

pub fn render_hint_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let hint = match ui_state.active_section {
        ActiveSection::Search => "Enter search · Tab next section · Ctrl+Q quit",
        ActiveSection::Results => "Enter lyrics · S save · P/N page · Esc back · H help",
        ActiveSection::Favorites => "Enter view · Del remove · Tab next section · H help",
    };
    let bar = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}
