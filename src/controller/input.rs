//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActiveSection, Catalog};
use super::AppController;

impl<C: Catalog> AppController<C> {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = &self.model;

        // Warnings block all other interactions until dismissed
        if model.has_warning().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                model.clear_warning().await;
            }
            return Ok(());
        }

        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        let ui_state = model.get_ui_state().await;

        match ui_state.active_section {
            ActiveSection::Search => {
                match key.code {
                    KeyCode::Enter => {
                        self.submit_search().await;
                        return Ok(());
                    }
                    KeyCode::Esc => {
                        model.update_search_query(String::new()).await;
                        self.on_query_changed().await;
                        return Ok(());
                    }
                    KeyCode::Backspace => {
                        model.backspace_search().await;
                        self.on_query_changed().await;
                        return Ok(());
                    }
                    KeyCode::Char(c) => {
                        // Q still quits even in search mode when Ctrl is pressed
                        if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                            model.set_should_quit(true).await;
                            return Ok(());
                        }
                        model.append_to_search(c).await;
                        self.on_query_changed().await;
                        return Ok(());
                    }
                    _ => {}
                }
            }
            ActiveSection::Results => {
                let tree = self.display_tree().await;
                let action = match key.code {
                    KeyCode::Up => {
                        model.content_move_up().await;
                        return Ok(());
                    }
                    KeyCode::Down => {
                        model.content_move_down().await;
                        return Ok(());
                    }
                    KeyCode::Enter => tree.selected_song().map(|row| row.view.action.clone()),
                    KeyCode::Char('s') | KeyCode::Char('S') => {
                        tree.selected_song().map(|row| row.save.action.clone())
                    }
                    KeyCode::Char('p') | KeyCode::Char('P') => {
                        tree.navigation.prev.as_ref().map(|c| c.action.clone())
                    }
                    KeyCode::Char('n') | KeyCode::Char('N') => {
                        tree.navigation.next.as_ref().map(|c| c.action.clone())
                    }
                    KeyCode::Esc | KeyCode::Backspace => tree.back_control().map(|c| c.action.clone()),
                    _ => None,
                };
                if let Some(action) = action {
                    self.dispatch(action).await;
                    return Ok(());
                }
            }
            ActiveSection::Favorites => {
                let tree = self.display_tree().await;
                let row = tree.favorites.rows.get(ui_state.favorite_selected);
                let action = match key.code {
                    KeyCode::Up => {
                        model.favorite_move_up().await;
                        return Ok(());
                    }
                    KeyCode::Down => {
                        model.favorite_move_down().await;
                        return Ok(());
                    }
                    KeyCode::Enter => {
                        model.set_active_section(ActiveSection::Results).await;
                        row.map(|r| r.view.action.clone())
                    }
                    KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('D') => {
                        row.map(|r| r.remove.action.clone())
                    }
                    _ => None,
                };
                if let Some(action) = action {
                    self.dispatch(action).await;
                    return Ok(());
                }
            }
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    model.cycle_section_backward().await;
                } else {
                    model.cycle_section_forward().await;
                }
            }
            KeyCode::BackTab => {
                model.cycle_section_backward().await;
            }
            // Focus search
            KeyCode::Char('/') => {
                model.set_active_section(ActiveSection::Search).await;
            }
            // Show help popup
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::controller::tests::{ScriptedCatalog, calls, controller_with};
    use crate::model::FavoriteEntry;

    const PAGE: &str = r#"{"data": [{"title": "Hello", "artist": {"name": "Adele"}}]}"#;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test(start_paused = true)]
    async fn typing_and_enter_drive_the_search_box() {
        let controller = controller_with(ScriptedCatalog::new(PAGE, "{}"));
        for c in "helo".chars() {
            controller.handle_key_event(press(KeyCode::Char(c))).await.unwrap();
        }
        controller.handle_key_event(press(KeyCode::Backspace)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Char('p'))).await.unwrap();

        assert_eq!(controller.model.search_query().await, "help");

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(calls(&controller), ["search:help"]);
    }

    #[tokio::test]
    async fn blank_enter_opens_warning_that_blocks_input() {
        let controller = controller_with(ScriptedCatalog::new(PAGE, "{}"));

        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        assert!(controller.model.has_warning().await);

        controller.handle_key_event(press(KeyCode::Char('x'))).await.unwrap();
        assert_eq!(controller.model.search_query().await, "");

        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
        assert!(!controller.model.has_warning().await);
    }

    #[tokio::test]
    async fn save_key_stores_selected_song() {
        let controller = controller_with(ScriptedCatalog::new(PAGE, "{}"));
        controller.search("hello").await;
        controller.model.set_active_section(ActiveSection::Results).await;

        controller.handle_key_event(press(KeyCode::Char('s'))).await.unwrap();
        controller.handle_key_event(press(KeyCode::Char('s'))).await.unwrap();

        assert_eq!(controller.favorites.load(), vec![FavoriteEntry::new("Adele", "Hello")]);
    }

    #[tokio::test]
    async fn delete_key_removes_selected_favorite() {
        let controller = controller_with(ScriptedCatalog::new(PAGE, "{}"));
        controller.favorites.add("A", "1").unwrap();
        controller.favorites.add("B", "2").unwrap();
        controller.model.set_active_section(ActiveSection::Favorites).await;

        controller.handle_key_event(press(KeyCode::Down)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Delete)).await.unwrap();

        assert_eq!(controller.favorites.load(), vec![FavoriteEntry::new("A", "1")]);
        assert_eq!(controller.model.get_ui_state().await.favorite_selected, 0);
    }

    #[tokio::test]
    async fn ctrl_q_quits_from_search_box() {
        let controller = controller_with(ScriptedCatalog::new(PAGE, "{}"));

        controller.handle_key_event(press(KeyCode::Char('q'))).await.unwrap();
        assert!(!controller.model.should_quit().await);

        controller
            .handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        assert!(controller.model.should_quit().await);
    }
}
