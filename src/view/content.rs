//! Results area rendering (song list, lyrics, messages, page controls)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph, Wrap},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, UiState};
use super::display::{Control, DisplayTree, Navigation, ResultsArea, SongRow};
use super::utils::{calculate_num_width, literal, render_scrollable_list, truncate_string};

pub fn render_results(frame: &mut Frame, area: Rect, tree: &DisplayTree, ui_state: &UiState) {
    let is_focused = ui_state.active_section == ActiveSection::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Results
            Constraint::Length(3), // Prev / Next
        ])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    match &tree.results {
        ResultsArea::Message(text) => {
            let message = Paragraph::new(literal(text))
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: false })
                .block(block);
            frame.render_widget(message, chunks[0]);
        }
        ResultsArea::Songs { rows, selected_index } => {
            let width = chunks[0].width.saturating_sub(4) as usize;
            let items = render_song_items(rows, *selected_index, is_focused, width);
            render_scrollable_list(frame, chunks[0], items, *selected_index, block);
        }
        ResultsArea::Lyrics { artist, title, lines, back, scroll } => {
            let mut text = vec![
                Line::from(vec![
                    Span::styled(
                        literal(artist),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" - {}", literal(title)), Style::default().fg(Color::Cyan)),
                ]),
                Line::from(""),
            ];
            text.extend(lines.iter().map(|line| Line::from(literal(line))));
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(
                format!("[Esc] {}", back.label),
                Style::default().fg(Color::Green),
            )));

            let lyrics = Paragraph::new(text)
                .wrap(Wrap { trim: false })
                .scroll((*scroll, 0))
                .block(block);
            frame.render_widget(lyrics, chunks[0]);
        }
    }

    render_navigation(frame, chunks[1], &tree.navigation);
}

fn render_song_items(
    rows: &[SongRow],
    selected_index: usize,
    is_focused: bool,
    content_width: usize,
) -> Vec<ListItem<'static>> {
    let num_width = calculate_num_width(rows.len());
    let actions = "[Enter] Get Lyrics  [S] Save";
    let text_width = content_width.saturating_sub(num_width + 3);

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let selected = i == selected_index;
            let style = if selected && is_focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let artist = literal(&row.artist);
            let title = truncate_string(
                &literal(&row.title),
                text_width.saturating_sub(artist.chars().count() + 3),
            );
            let mut spans = vec![
                Span::styled(format!("{:>num_width$} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(artist, style.add_modifier(Modifier::BOLD)),
                Span::styled(format!(" - {}", title), style),
            ];
            if selected && is_focused {
                spans.push(Span::styled(
                    format!("  {}", actions),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect()
}

fn render_navigation(frame: &mut Frame, area: Rect, navigation: &Navigation) {
    let control = |key: &str, control: &Option<Control>| match control {
        Some(c) => Span::styled(
            format!("[{}] {}", key, c.label),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        None => Span::raw(""),
    };

    let line = if navigation.is_empty() {
        Line::from("")
    } else {
        Line::from(vec![
            control("P", &navigation.prev),
            Span::raw("   "),
            control("N", &navigation.next),
        ])
    };

    let more = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" More "));
    frame.render_widget(more, area);
}
