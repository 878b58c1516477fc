//! YouTube link normalization.
//!
//! Pasted links come in many shapes (`watch?v=`, `youtu.be/`, `/embed/`,
//! `/v/`, channel paths). Stored video blocks hold the embed form so the
//! decoder's embed pattern recognises them on the next load.

use regex::Regex;
use std::sync::OnceLock;

pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";

fn video_id_regex() -> &'static Regex {
    static VIDEO_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    VIDEO_ID_REGEX.get_or_init(|| {
        Regex::new(
            r#"(?i)(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/ ]{11})"#,
        )
        .expect("Invalid YouTube id regex")
    })
}

/// Extracts the 11 character video id from a YouTube link.
pub fn extract_youtube_id(url: &str) -> Option<&str> {
    video_id_regex()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Rewrites a YouTube link to `https://www.youtube.com/embed/{id}`.
///
/// Input without a recognisable id is returned unchanged.
pub fn normalize_youtube_url(url: &str) -> String {
    match extract_youtube_id(url) {
        Some(id) => format!("{EMBED_BASE}{id}"),
        None => {
            log::debug!("no YouTube id in {url:?}, keeping it as is");
            url.to_string()
        }
    }
}
