use regex::Regex;
use std::sync::OnceLock;

/// YouTube iframe embed markup.
///
/// The rendered tag is a byte-exact contract with whatever displays stored
/// documents as HTML; the capture pattern must keep recognising it.
pub struct VideoEmbed;

impl VideoEmbed {
    pub const TAG_OPEN: &'static str = r#"<iframe width="560" height="315" src=""#;
    pub const TAG_CLOSE: &'static str = r#"" title="YouTube video player" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share" referrerpolicy="strict-origin-when-cross-origin" allowfullscreen></iframe>"#;

    /// Single-line match; an iframe wrapped across lines is not recognised.
    const PATTERN: &'static str =
        r#"<iframe.*src="(https://www\.youtube\.com/embed/[^"]+)".*></iframe>"#;

    fn regex() -> &'static Regex {
        static EMBED_REGEX: OnceLock<Regex> = OnceLock::new();
        EMBED_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid embed regex"))
    }

    /// Returns the `src` of a YouTube embed tag found in `line`.
    pub fn capture_src(line: &str) -> Option<&str> {
        Self::regex()
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn render(url: &str) -> String {
        let mut out =
            String::with_capacity(Self::TAG_OPEN.len() + url.len() + Self::TAG_CLOSE.len());
        out.push_str(Self::TAG_OPEN);
        out.push_str(url);
        out.push_str(Self::TAG_CLOSE);
        out
    }

    /// Whether a video URL survives a render/capture cycle unchanged.
    pub fn is_recoverable(url: &str) -> bool {
        Self::capture_src(&Self::render(url)) == Some(url)
    }
}
