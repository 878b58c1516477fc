use super::kinds::{Bullet, Heading, HeadingLevel, VideoEmbed};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of decoding: each line is classified independently
/// without reference to surrounding lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Heading {
        level: HeadingLevel,
        content: &'a str,
    },
    Bullet {
        content: &'a str,
    },
    Video {
        url: &'a str,
    },
    Text {
        line: &'a str,
    },
}

/// Classifies individual lines for the decoding phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Precedence: heading 1/2/3, bullet, video embed, then text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some((level, content)) = Heading::strip(line) {
            return LineClass::Heading { level, content };
        }
        if let Some(content) = Bullet::strip(line) {
            return LineClass::Bullet { content };
        }
        if let Some(url) = VideoEmbed::capture_src(line) {
            return LineClass::Video { url };
        }
        LineClass::Text { line }
    }
}
