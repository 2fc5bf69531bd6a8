//! Lyrics catalog API client

use std::future::Future;

use serde::de::DeserializeOwned;

use super::content::{LyricsResult, SearchResponse};
use crate::{log_api_request, log_api_result};

/// Transport failure or a body that is not the expected JSON
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read-only lookups against the lyrics catalog. Each call is a single attempt.
pub trait Catalog: Send + Sync + 'static {
    fn search(
        &self,
        term: &str,
    ) -> impl Future<Output = Result<SearchResponse, CatalogError>> + Send;

    /// Fetches a paging locator taken from a previous response, unchanged.
    fn follow_link(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<SearchResponse, CatalogError>> + Send;

    fn fetch_lyrics(
        &self,
        artist: &str,
        title: &str,
    ) -> impl Future<Output = Result<LyricsResult, CatalogError>> + Send;
}

/// HTTP client for lyrics.ovh
#[derive(Clone)]
pub struct LyricsClient {
    http: reqwest::Client,
    base_url: String,
}

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

impl LyricsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    // Status codes are not checked: a lyrics miss comes back as 404 with an
    // `error` body that has to reach the caller.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let body = self.http.get(url).send().await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

pub fn suggest_url(base_url: &str, term: &str) -> String {
    format!("{}/suggest/{}", base_url, urlencoding::encode(term))
}

pub fn lyrics_url(base_url: &str, artist: &str, title: &str) -> String {
    format!(
        "{}/v1/{}/{}",
        base_url,
        urlencoding::encode(artist),
        urlencoding::encode(title)
    )
}

impl Catalog for LyricsClient {
    async fn search(&self, term: &str) -> Result<SearchResponse, CatalogError> {
        let url = suggest_url(&self.base_url, term);
        log_api_request!("search", url, term);
        let result = self.get_json(&url).await;
        log_api_result!("search", result, items = |page: &SearchResponse| page.data.len());
        result
    }

    async fn follow_link(&self, url: &str) -> Result<SearchResponse, CatalogError> {
        log_api_request!("follow_link", url);
        let result = self.get_json(url).await;
        log_api_result!("follow_link", result, items = |page: &SearchResponse| page.data.len());
        result
    }

    async fn fetch_lyrics(&self, artist: &str, title: &str) -> Result<LyricsResult, CatalogError> {
        let url = lyrics_url(&self.base_url, artist, title);
        log_api_request!("fetch_lyrics", url, artist, title);
        let result = self.get_json(&url).await;
        log_api_result!(
            "fetch_lyrics",
            result,
            found = |body: &LyricsResult| matches!(body, LyricsResult::Found { .. })
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.lyrics.ovh";

    #[test]
    fn suggest_url_encodes_the_whole_term() {
        assert_eq!(
            suggest_url(BASE, "AC/DC & friends?"),
            "https://api.lyrics.ovh/suggest/AC%2FDC%20%26%20friends%3F"
        );
    }

    #[test]
    fn suggest_url_encodes_utf8_bytes() {
        assert_eq!(suggest_url(BASE, "Beyoncé"), "https://api.lyrics.ovh/suggest/Beyonc%C3%A9");
    }

    #[test]
    fn lyrics_url_uses_artist_then_title_segments() {
        assert_eq!(
            lyrics_url(BASE, "Guns N' Roses", "Sweet Child O' Mine"),
            "https://api.lyrics.ovh/v1/Guns%20N%27%20Roses/Sweet%20Child%20O%27%20Mine"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_dropped() {
        let client = LyricsClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
