//! Catalog response types and the state of the results area

use serde::{Deserialize, Deserializer};

/// Artist object nested in a suggestion item
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ArtistRef {
    pub name: String,
}

/// A song from a suggestion search page
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SongSummary {
    pub artist: ArtistRef,
    pub title: String,
}

impl SongSummary {
    pub fn song_ref(&self) -> SongRef {
        SongRef {
            artist: self.artist.name.clone(),
            title: self.title.clone(),
        }
    }
}

/// One page of suggestion results, with the API's own paging locators
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<SongSummary>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn links(&self) -> PaginationLinks {
        PaginationLinks {
            prev: self.prev.clone().filter(|url| !url.is_empty()),
            next: self.next.clone().filter(|url| !url.is_empty()),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SongSummary>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationLinks {
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Body of a lyrics lookup. The service reports a miss as `{ "error": ... }`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LyricsResult {
    NotFound { error: String },
    Found { lyrics: String },
}

/// The (artist, title) pair a control refers to
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SongRef {
    pub artist: String,
    pub title: String,
}

impl SongRef {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }
}

/// Which request produced a failure state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailedRequest {
    Search,
    FollowLink,
    Lyrics,
}

/// Represents what the results area currently shows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContentView {
    /// Nothing searched yet
    #[default]
    Empty,
    /// Shown after leaving the lyrics view
    Placeholder,
    SearchResults {
        response: SearchResponse,
        selected_index: usize,
    },
    Lyrics {
        song: SongRef,
        lyrics: LyricsResult,
        scroll: u16,
    },
    Failed(FailedRequest),
}

/// State for the results area
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    pub view: ContentView,
    pub is_loading: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_suggest_page_and_ignores_extra_fields() {
        let body = r#"{
            "data": [
                {"id": 1, "title": "Hello", "artist": {"id": 7, "name": "Adele"}, "album": {}},
                {"title": "Hello", "artist": {"name": "Lionel Richie"}}
            ],
            "total": 300,
            "next": "https://api.deezer.com/search?limit=15&q=hello&index=15"
        }"#;
        let page: SearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].song_ref(), SongRef::new("Adele", "Hello"));
        assert_eq!(page.prev, None);
        assert_eq!(
            page.links().next.as_deref(),
            Some("https://api.deezer.com/search?limit=15&q=hello&index=15")
        );
    }

    #[test]
    fn missing_or_null_data_counts_as_empty() {
        let page: SearchResponse = serde_json::from_str(r#"{"prev": null, "next": null}"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.links(), PaginationLinks::default());

        let page: SearchResponse =
            serde_json::from_str(r#"{"data": null, "prev": null, "next": null}"#).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn lyrics_body_prefers_error_field() {
        let found: LyricsResult = serde_json::from_str(r#"{"lyrics": "la\nla"}"#).unwrap();
        assert_eq!(found, LyricsResult::Found { lyrics: "la\nla".into() });

        let missing: LyricsResult =
            serde_json::from_str(r#"{"error": "No lyrics found"}"#).unwrap();
        assert_eq!(missing, LyricsResult::NotFound { error: "No lyrics found".into() });

        assert!(serde_json::from_str::<LyricsResult>(r#"{"status": 500}"#).is_err());
    }
}
