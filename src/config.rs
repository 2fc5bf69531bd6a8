//! Runtime configuration with the defaults the client ships with

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.lyrics.ovh";
pub const FAVORITES_SLOT: &str = "lyricsFavorites";
const CACHE_DIR: &str = ".cache";

/// Settings shared by the catalog client, the favorites store and the controller
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub cache_dir: PathBuf,
    pub favorites_slot: String,
    /// Quiet period before a live-typing search fires
    pub debounce_delay: Duration,
    /// Shortest trimmed query that live typing will search for
    pub min_live_query_len: usize,
    pub poll_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            cache_dir: PathBuf::from(CACHE_DIR),
            favorites_slot: FAVORITES_SLOT.to_string(),
            debounce_delay: Duration::from_millis(700),
            min_live_query_len: 2,
            poll_interval: Duration::from_millis(50),
        }
    }
}
