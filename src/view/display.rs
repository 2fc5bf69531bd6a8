//! Pure rendering of application state into a display tree.
//!
//! Nothing here touches the terminal. The tree carries every control the user
//! can activate together with the action it performs, so the controller reads
//! song references back from the rendered tree instead of re-deriving them
//! from free text.

use crate::model::{ContentView, FailedRequest, FavoriteEntry, LyricsResult, SongRef};

pub const INITIAL_PLACEHOLDER: &str = "Type a search to get results.";
pub const BACK_PLACEHOLDER: &str = "Type a search to get results again.";
pub const NO_RESULTS: &str = "No results. Try a different search.";
pub const NO_FAVORITES: &str = "No favorites yet.";
pub const SEARCH_FAILED: &str = "There was an error fetching results. Try again.";
pub const MORE_FAILED: &str = "Couldn't load more results.";
pub const LYRICS_FAILED: &str = "Failed to load lyrics. Try again.";

/// What activating a control does
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    ViewLyrics(SongRef),
    SaveFavorite(SongRef),
    FollowLink(String),
    BackToPlaceholder,
    RemoveFavorite(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    pub label: &'static str,
    pub action: Action,
}

impl Control {
    fn new(label: &'static str, action: Action) -> Self {
        Self { label, action }
    }
}

/// A song row in the results list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongRow {
    pub artist: String,
    pub title: String,
    pub view: Control,
    pub save: Control,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultsArea {
    Message(String),
    Songs {
        rows: Vec<SongRow>,
        selected_index: usize,
    },
    Lyrics {
        artist: String,
        title: String,
        lines: Vec<String>,
        back: Control,
        scroll: u16,
    },
}

/// Prev/Next controls, present only when the response carried the locator
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigation {
    pub prev: Option<Control>,
    pub next: Option<Control>,
}

impl Navigation {
    pub fn is_empty(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavoriteRow {
    pub artist: String,
    pub title: String,
    pub view: Control,
    pub remove: Control,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavoritesArea {
    pub rows: Vec<FavoriteRow>,
    /// Set only while the collection is empty
    pub empty_message: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayTree {
    pub results: ResultsArea,
    pub navigation: Navigation,
    pub favorites: FavoritesArea,
    pub loading: bool,
}

impl DisplayTree {
    pub fn selected_song(&self) -> Option<&SongRow> {
        match &self.results {
            ResultsArea::Songs { rows, selected_index } => rows.get(*selected_index),
            _ => None,
        }
    }

    pub fn back_control(&self) -> Option<&Control> {
        match &self.results {
            ResultsArea::Lyrics { back, .. } => Some(back),
            _ => None,
        }
    }
}

/// Everything the renderer reads
pub struct ViewState<'a> {
    pub content: &'a ContentView,
    pub favorites: &'a [FavoriteEntry],
    pub is_loading: bool,
}

pub fn render(state: &ViewState) -> DisplayTree {
    let (results, navigation) = render_results(state.content);
    DisplayTree {
        results,
        navigation,
        favorites: render_favorites(state.favorites),
        loading: state.is_loading,
    }
}

fn message(text: &str) -> (ResultsArea, Navigation) {
    (ResultsArea::Message(text.to_string()), Navigation::default())
}

fn render_results(content: &ContentView) -> (ResultsArea, Navigation) {
    match content {
        ContentView::Empty => message(INITIAL_PLACEHOLDER),
        ContentView::Placeholder => message(BACK_PLACEHOLDER),
        ContentView::Failed(FailedRequest::Search) => message(SEARCH_FAILED),
        ContentView::Failed(FailedRequest::FollowLink) => message(MORE_FAILED),
        ContentView::Failed(FailedRequest::Lyrics) => message(LYRICS_FAILED),
        ContentView::SearchResults { response, selected_index } => {
            if response.is_empty() {
                return message(NO_RESULTS);
            }
            let rows = response
                .data
                .iter()
                .map(|song| {
                    let song_ref = song.song_ref();
                    SongRow {
                        artist: song.artist.name.clone(),
                        title: song.title.clone(),
                        view: Control::new("Get Lyrics", Action::ViewLyrics(song_ref.clone())),
                        save: Control::new("Save", Action::SaveFavorite(song_ref)),
                    }
                })
                .collect();
            let links = response.links();
            let navigation = Navigation {
                prev: links.prev.map(|url| Control::new("Prev", Action::FollowLink(url))),
                next: links.next.map(|url| Control::new("Next", Action::FollowLink(url))),
            };
            (
                ResultsArea::Songs {
                    rows,
                    selected_index: *selected_index,
                },
                navigation,
            )
        }
        ContentView::Lyrics { song, lyrics, scroll } => match lyrics {
            LyricsResult::NotFound { error } => message(error),
            LyricsResult::Found { lyrics } => (
                ResultsArea::Lyrics {
                    artist: song.artist.clone(),
                    title: song.title.clone(),
                    lines: split_lines(lyrics),
                    back: Control::new("Back to results", Action::BackToPlaceholder),
                    scroll: *scroll,
                },
                Navigation::default(),
            ),
        },
    }
}

fn render_favorites(favorites: &[FavoriteEntry]) -> FavoritesArea {
    let rows = favorites
        .iter()
        .enumerate()
        .map(|(i, f)| FavoriteRow {
            artist: f.artist.clone(),
            title: f.title.clone(),
            view: Control::new("View", Action::ViewLyrics(SongRef::new(&f.artist, &f.title))),
            remove: Control::new("Remove", Action::RemoveFavorite(i)),
        })
        .collect::<Vec<_>>();
    let empty_message = rows.is_empty().then_some(NO_FAVORITES);
    FavoritesArea { rows, empty_message }
}

/// Splits on CRLF, lone CR or lone LF. Like a plain string split, a trailing
/// terminator yields a final empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            '\n' => lines.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArtistRef, SearchResponse, SongSummary};

    fn song(artist: &str, title: &str) -> SongSummary {
        SongSummary {
            artist: ArtistRef { name: artist.into() },
            title: title.into(),
        }
    }

    fn render_content(content: &ContentView) -> DisplayTree {
        render(&ViewState {
            content,
            favorites: &[],
            is_loading: false,
        })
    }

    #[test]
    fn splits_all_three_line_terminators() {
        assert_eq!(
            split_lines("line1\r\nline2\nline3\rline4"),
            ["line1", "line2", "line3", "line4"]
        );
    }

    #[test]
    fn keeps_blank_lines_between_verses() {
        assert_eq!(split_lines("a\n\nb\r\n"), ["a", "", "b", ""]);
        assert_eq!(split_lines(""), [""]);
        assert_eq!(split_lines("\r\r\n"), ["", "", ""]);
    }

    #[test]
    fn empty_page_shows_no_results_without_navigation() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"data": [], "prev": null, "next": null}"#).unwrap();
        let tree = render_content(&ContentView::SearchResults { response, selected_index: 0 });

        assert_eq!(tree.results, ResultsArea::Message(NO_RESULTS.into()));
        assert!(tree.navigation.is_empty());
    }

    #[test]
    fn empty_page_ignores_its_locators() {
        let response = SearchResponse {
            data: vec![],
            prev: None,
            next: Some("https://api.deezer.com/search?q=x&index=15".into()),
        };
        let tree = render_content(&ContentView::SearchResults { response, selected_index: 0 });

        assert!(tree.navigation.is_empty());
    }

    #[test]
    fn song_rows_carry_their_own_references() {
        let response = SearchResponse {
            data: vec![song("Adele", "Hello"), song("<b>Evil</b>", "a & b")],
            prev: None,
            next: None,
        };
        let tree = render_content(&ContentView::SearchResults { response, selected_index: 1 });

        let row = tree.selected_song().unwrap();
        assert_eq!(row.artist, "<b>Evil</b>");
        assert_eq!(row.view.action, Action::ViewLyrics(SongRef::new("<b>Evil</b>", "a & b")));
        assert_eq!(row.save.action, Action::SaveFavorite(SongRef::new("<b>Evil</b>", "a & b")));
        assert!(tree.navigation.is_empty());
    }

    #[test]
    fn navigation_mirrors_present_locators() {
        let response = SearchResponse {
            data: vec![song("Adele", "Hello")],
            prev: Some("https://api.deezer.com/search?q=hello&index=0".into()),
            next: Some("https://api.deezer.com/search?q=hello&index=30".into()),
        };
        let tree = render_content(&ContentView::SearchResults { response, selected_index: 0 });

        assert_eq!(
            tree.navigation.prev.unwrap().action,
            Action::FollowLink("https://api.deezer.com/search?q=hello&index=0".into())
        );
        assert_eq!(
            tree.navigation.next.unwrap().action,
            Action::FollowLink("https://api.deezer.com/search?q=hello&index=30".into())
        );
    }

    #[test]
    fn lyrics_error_renders_only_the_message() {
        let tree = render_content(&ContentView::Lyrics {
            song: SongRef::new("A", "T"),
            lyrics: LyricsResult::NotFound { error: "no lyrics found".into() },
            scroll: 0,
        });

        assert_eq!(tree.results, ResultsArea::Message("no lyrics found".into()));
        assert!(tree.back_control().is_none());
        assert!(tree.navigation.is_empty());
    }

    #[test]
    fn lyrics_view_has_heading_lines_and_back() {
        let tree = render_content(&ContentView::Lyrics {
            song: SongRef::new("Adele", "Hello"),
            lyrics: LyricsResult::Found { lyrics: "Hello\r\nit's me".into() },
            scroll: 0,
        });

        match &tree.results {
            ResultsArea::Lyrics { artist, title, lines, .. } => {
                assert_eq!((artist.as_str(), title.as_str()), ("Adele", "Hello"));
                assert_eq!(lines, &["Hello", "it's me"]);
            }
            other => panic!("unexpected results area {other:?}"),
        }
        assert_eq!(tree.back_control().unwrap().action, Action::BackToPlaceholder);
    }

    #[test]
    fn failures_use_a_generic_message_per_request() {
        assert_eq!(
            render_content(&ContentView::Failed(FailedRequest::Search)).results,
            ResultsArea::Message(SEARCH_FAILED.into())
        );
        assert_eq!(
            render_content(&ContentView::Failed(FailedRequest::FollowLink)).results,
            ResultsArea::Message(MORE_FAILED.into())
        );
        assert_eq!(
            render_content(&ContentView::Failed(FailedRequest::Lyrics)).results,
            ResultsArea::Message(LYRICS_FAILED.into())
        );
    }

    #[test]
    fn favorites_toggle_the_empty_message() {
        let empty = render(&ViewState {
            content: &ContentView::Empty,
            favorites: &[],
            is_loading: true,
        });
        assert_eq!(empty.favorites.empty_message, Some(NO_FAVORITES));
        assert!(empty.loading);

        let favorites = [FavoriteEntry::new("A", "1"), FavoriteEntry::new("B", "2")];
        let tree = render(&ViewState {
            content: &ContentView::Empty,
            favorites: &favorites,
            is_loading: false,
        });
        assert_eq!(tree.favorites.empty_message, None);
        assert_eq!(tree.favorites.rows[1].remove.action, Action::RemoveFavorite(1));
        assert_eq!(
            tree.favorites.rows[1].view.action,
            Action::ViewLyrics(SongRef::new("B", "2"))
        );
    }
}
