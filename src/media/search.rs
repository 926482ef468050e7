use crate::config::Config;
use crate::process::{CommandError, ToolCommand};

/// Format passed to yt-dlp `--print`: one `id<TAB>title` line per result.
pub const PRINT_FORMAT: &str = "%(id)s\t%(title)s";

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
}

/// yt-dlp arguments for a flat YouTube search.
pub fn search_args(query: &str, count: u32) -> Vec<String> {
    vec![
        format!("ytsearch{count}:{query}"),
        "--flat-playlist".to_string(),
        "--no-warnings".to_string(),
        "--print".to_string(),
        PRINT_FORMAT.to_string(),
    ]
}

/// Parse yt-dlp output produced with [`PRINT_FORMAT`].
///
/// Lines without a tab or with an empty id are skipped. A missing title
/// falls back to the id.
pub fn parse_search_output(output: &str) -> Vec<SearchResult> {
    output
        .lines()
        .filter_map(|line| {
            let (id, title) = line.split_once('\t')?;
            let id = id.trim();
            if id.is_empty() {
                return None;
            }
            let title = match title.trim() {
                "" | "NA" => id,
                title => title,
            };
            Some(SearchResult {
                id: id.to_string(),
                title: title.to_string(),
            })
        })
        .collect()
}

/// Run a search through yt-dlp.
pub fn search(config: &Config, query: &str) -> Result<Vec<SearchResult>, CommandError> {
    let result = ToolCommand::new(&config.ytdlp)
        .args(&search_args(query, config.search_results))
        .run_checked()?;
    Ok(parse_search_output(&result.stdout))
}
