//! Search-and-play consumer of the menu: look a query up with yt-dlp,
//! let the user pick a result, hand it to mpv.

mod player;
mod search;

pub use player::{PlayOptions, mpv_args, play, watch_url};
pub use search::{PRINT_FORMAT, SearchResult, parse_search_output, search, search_args};

use thiserror::Error;

use crate::menu::{MenuError, MenuProvider};
use crate::process::CommandError;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("no results for '{0}'")]
    NoResults(String),

    #[error(transparent)]
    Menu(#[from] MenuError),
}

/// Ask the provider to choose one of `results`.
///
/// The menu only sees titles; the returned index is mapped back onto the
/// result list. Returns None when the user cancels.
pub fn pick_result<'r>(
    provider: &mut dyn MenuProvider,
    title: &str,
    query: &str,
    results: &'r [SearchResult],
) -> Result<Option<&'r SearchResult>, StreamError> {
    if results.is_empty() {
        return Err(StreamError::NoResults(query.to_string()));
    }

    let titles: Vec<String> = results.iter().map(|r| r.title.clone()).collect();
    let index = provider.select_index(title, &titles)?;
    Ok(index.and_then(|i| results.get(i)))
}
