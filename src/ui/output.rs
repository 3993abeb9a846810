//! Output functions for lyric status lines
//!
//! Two renderings of a [`Resolution`]: a plain line for terminals and
//! scripts, and a Waybar custom-module JSON object.

use crate::error::LyriflowResult;
use crate::provider::TrackQuery;
use crate::resolve::Resolution;
use console::style;
use serde::Serialize;

const NOT_FOUND_TEXT: &str = "Lyrics not found";
const NO_LYRICS_TEXT: &str = "No lyrics available";

/// Waybar custom module payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaybarOutput {
    pub text: String,
    pub alt: String,
    pub tooltip: String,
    pub class: String,
}

impl WaybarOutput {
    fn new(text: &str, alt: &str, tooltip: String, class: &str) -> Self {
        Self {
            text: text.to_string(),
            alt: alt.to_string(),
            tooltip,
            class: class.to_string(),
        }
    }

    /// Build the payload for a resolution
    pub fn from_resolution(resolution: &Resolution, track: &TrackQuery) -> Self {
        let tooltip = tooltip(track);
        match resolution {
            Resolution::Line(text) if text.is_empty() => {
                Self::new("♪", "instrumental", tooltip, "instrumental")
            }
            Resolution::Line(text) => Self::new(text, "playing", tooltip, "lyrics"),
            Resolution::NotFound => Self::new(NOT_FOUND_TEXT, "not-found", tooltip, "not-found"),
            Resolution::NoLyrics => Self::new(NO_LYRICS_TEXT, "no-lyrics", tooltip, "no-lyrics"),
        }
    }
}

/// Tooltip text: "Title - Artist", plus the album when known
pub fn tooltip(track: &TrackQuery) -> String {
    let mut tooltip = format!("{} - {}", track.title, track.artist);
    if !track.album.is_empty() {
        tooltip.push_str(&format!("\rAlbum: {}", track.album));
    }
    tooltip
}

/// Plain one-line rendering
pub fn plain_line(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Line(text) if text.is_empty() => "(instrumental)".to_string(),
        Resolution::Line(text) => text.clone(),
        Resolution::NotFound => NOT_FOUND_TEXT.to_string(),
        Resolution::NoLyrics => NO_LYRICS_TEXT.to_string(),
    }
}

/// Render a resolution in the requested format
pub fn render(resolution: &Resolution, track: &TrackQuery, waybar: bool) -> LyriflowResult<String> {
    if waybar {
        let output = WaybarOutput::from_resolution(resolution, track);
        Ok(serde_json::to_string(&output)?)
    } else {
        Ok(plain_line(resolution))
    }
}

/// Display a success step
pub fn step_ok(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn track(album: &str) -> TrackQuery {
        TrackQuery::new("Song", "Artist", album)
    }

    #[test]
    fn plain_lines() {
        assert_eq!(plain_line(&Resolution::Line("Hello".into())), "Hello");
        assert_eq!(plain_line(&Resolution::Line(String::new())), "(instrumental)");
        assert_eq!(plain_line(&Resolution::NotFound), "Lyrics not found");
        assert_eq!(plain_line(&Resolution::NoLyrics), "No lyrics available");
    }

    #[test]
    fn tooltip_with_and_without_album() {
        assert_eq!(tooltip(&track("")), "Song - Artist");
        assert_eq!(tooltip(&track("Album")), "Song - Artist\rAlbum: Album");
    }

    #[test]
    fn waybar_playing() {
        let rendered = render(&Resolution::Line("Hello".into()), &track("Album"), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            value,
            json!({
                "text": "Hello",
                "alt": "playing",
                "tooltip": "Song - Artist\rAlbum: Album",
                "class": "lyrics"
            })
        );
    }

    #[test]
    fn waybar_statuses() {
        let t = track("");
        let instrumental = WaybarOutput::from_resolution(&Resolution::Line(String::new()), &t);
        assert_eq!(instrumental.text, "♪");
        assert_eq!(instrumental.class, "instrumental");

        let not_found = WaybarOutput::from_resolution(&Resolution::NotFound, &t);
        assert_eq!(not_found.alt, "not-found");
        assert_eq!(not_found.class, "not-found");

        let no_lyrics = WaybarOutput::from_resolution(&Resolution::NoLyrics, &t);
        assert_eq!(no_lyrics.text, "No lyrics available");
        assert_eq!(no_lyrics.alt, "no-lyrics");
    }

    #[test]
    fn render_plain() {
        assert_eq!(
            render(&Resolution::NotFound, &track(""), false).unwrap(),
            "Lyrics not found"
        );
    }
}
