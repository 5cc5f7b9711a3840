//! Page configuration.

use crate::carousel::ticker::DEFAULT_INTERVAL_MS;
use crate::content::selection::DEFAULT_COUNT;

pub const DEFAULT_PROMPTS_SOURCE: &str = "prompts.json";
pub const DEFAULT_WAITLIST_ENDPOINT: &str = "https://example.com/waitlist";

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Content resource: `http(s)` URL or local path.
    pub prompts_source: String,
    /// Form POST target for the waitlist.
    pub waitlist_endpoint: String,
    /// Prompts drawn per reshuffle.
    pub selection_count: usize,
    /// Visibility recompute cadence.
    pub tick_interval_ms: f64,
    /// Delay between activation and the detail view appearing.
    pub reveal_delay_ms: f64,
    pub typing_ms_per_char: f64,
    /// Bouncing circles in the backdrop.
    pub circle_count: usize,
    /// Append `t=<ms>` to remote image URLs.
    pub cache_bust: bool,
    /// Fixed RNG seed for reproducible selections.
    pub seed: Option<u64>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            prompts_source: DEFAULT_PROMPTS_SOURCE.to_string(),
            waitlist_endpoint: DEFAULT_WAITLIST_ENDPOINT.to_string(),
            selection_count: DEFAULT_COUNT,
            tick_interval_ms: DEFAULT_INTERVAL_MS,
            reveal_delay_ms: 500.0,
            typing_ms_per_char: 100.0,
            circle_count: 5,
            cache_bust: true,
            seed: None,
        }
    }
}
