use crate::config::Config;
use crate::process::{CommandError, ToolCommand};

/// Playback switches for mpv.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayOptions {
    /// Audio only.
    pub no_video: bool,
    /// Repeat the file forever.
    pub loop_playback: bool,
}

/// Watch URL for a YouTube video id.
pub fn watch_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={id}")
}

/// mpv arguments: switches, then extra configured arguments, then the URL.
pub fn mpv_args(url: &str, options: PlayOptions, extra: &[String]) -> Vec<String> {
    let mut args = Vec::with_capacity(extra.len() + 3);
    if options.no_video {
        args.push("--no-video".to_string());
    }
    if options.loop_playback {
        args.push("--loop-file=inf".to_string());
    }
    args.extend(extra.iter().cloned());
    args.push(url.to_string());
    args
}

/// Play `url` with mpv attached to the terminal.
pub fn play(config: &Config, url: &str, options: PlayOptions) -> Result<(), CommandError> {
    ToolCommand::new(&config.mpv)
        .args(&mpv_args(url, options, &config.mpv_args))
        .status()
}
