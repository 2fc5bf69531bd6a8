//! Search, paging and lyrics requests

use tokio::task::JoinHandle;

use crate::model::{ActiveSection, Catalog, FailedRequest, SongRef};
use super::{AppController, VALIDATION_WARNING};

impl<C: Catalog> AppController<C> {
    /// Explicit submit: searches right away, or warns when the box is blank.
    pub async fn submit_search(&self) -> Option<JoinHandle<()>> {
        let query = self.model.search_query().await;
        let term = query.trim().to_string();
        if term.is_empty() {
            tracing::debug!("Ignoring blank search submit");
            self.model.set_warning(VALIDATION_WARNING).await;
            return None;
        }

        self.model.set_active_section(ActiveSection::Results).await;
        let controller = self.clone();
        Some(tokio::spawn(async move {
            controller.search(&term).await;
        }))
    }

    /// Live typing: restarts the quiet-period timer. When it elapses the
    /// query is read again and searched if it is long enough.
    pub async fn on_query_changed(&self) {
        let controller = self.clone();
        self.debouncer
            .trigger(async move {
                let query = controller.model.search_query().await;
                let term = query.trim();
                if term.chars().count() >= controller.min_live_query_len {
                    controller.search(term).await;
                }
            })
            .await;
    }

    pub async fn search(&self, term: &str) {
        tracing::debug!(term, "Performing search");
        self.model.set_loading(true).await;
        let result = self.catalog.search(term).await;
        self.model.set_loading(false).await;

        match result {
            Ok(response) => {
                tracing::info!(
                    term,
                    items = response.data.len(),
                    has_prev = response.prev.is_some(),
                    has_next = response.next.is_some(),
                    "Search completed"
                );
                self.model.set_search_results(response).await;
            }
            Err(e) => {
                tracing::error!(term, error = %e, "Search failed");
                self.model.set_failed(FailedRequest::Search).await;
            }
        }
    }

    pub async fn follow_link(&self, url: &str) {
        tracing::debug!(url, "Loading another page");
        self.model.set_loading(true).await;
        let result = self.catalog.follow_link(url).await;
        self.model.set_loading(false).await;

        match result {
            Ok(response) => {
                tracing::info!(items = response.data.len(), "Page loaded");
                self.model.set_search_results(response).await;
            }
            Err(e) => {
                tracing::error!(url, error = %e, "Loading page failed");
                self.model.set_failed(FailedRequest::FollowLink).await;
            }
        }
    }

    pub async fn fetch_lyrics(&self, song: SongRef) {
        tracing::debug!(artist = %song.artist, title = %song.title, "Fetching lyrics");
        self.model.set_loading(true).await;
        let result = self.catalog.fetch_lyrics(&song.artist, &song.title).await;
        self.model.set_loading(false).await;

        match result {
            Ok(lyrics) => {
                self.model.set_lyrics(song, lyrics).await;
            }
            Err(e) => {
                tracing::error!(artist = %song.artist, title = %song.title, error = %e, "Lyrics lookup failed");
                self.model.set_failed(FailedRequest::Lyrics).await;
            }
        }
    }
}
