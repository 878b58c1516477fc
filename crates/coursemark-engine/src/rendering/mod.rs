//! # Encoding
//!
//! Writes content blocks back to the flat text form and checks that a
//! document survives a decode/encode cycle unchanged.

use crate::models::ContentBlock;
use crate::parsing::{
    kinds::{Bullet, Heading, HeadingLevel, VideoEmbed},
    parse_document,
};

/// Encodes blocks into the flat text document, one or more lines per block
/// joined with `\n`.
pub fn render_document(blocks: &[ContentBlock]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(blocks.len());

    for block in blocks {
        match block {
            ContentBlock::Heading1 { content } => {
                lines.push(heading_line(HeadingLevel::H1, content));
            }
            ContentBlock::Heading2 { content } => {
                lines.push(heading_line(HeadingLevel::H2, content));
            }
            ContentBlock::Heading3 { content } => {
                lines.push(heading_line(HeadingLevel::H3, content));
            }
            ContentBlock::Text { content } => lines.push(content.clone()),
            ContentBlock::List { items } => {
                lines.extend(items.iter().map(|item| format!("{}{}", Bullet::DASH, item.content)));
            }
            ContentBlock::Video { youtube_url } => {
                if !VideoEmbed::is_recoverable(youtube_url) {
                    log::warn!(
                        "video url {youtube_url:?} is not an embed url; it will load back as text"
                    );
                }
                lines.push(VideoEmbed::render(youtube_url));
            }
        }
    }

    let out = lines.join("\n");
    log::debug!("encoded {} blocks into {} bytes", blocks.len(), out.len());
    out
}

fn heading_line(level: HeadingLevel, content: &str) -> String {
    format!("{}{}", Heading::prefix(level), content)
}

/// Outcome of decoding and re-encoding a stored document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundTrip {
    Stable,
    Unstable {
        /// 1-based line number of the first difference.
        line: usize,
        original: Option<String>,
        rendered: Option<String>,
    },
}

impl RoundTrip {
    pub fn is_stable(&self) -> bool {
        matches!(self, RoundTrip::Stable)
    }
}

/// Decodes `text`, re-encodes the blocks and compares the result line by line.
pub fn check_round_trip(text: &str) -> RoundTrip {
    let rendered = render_document(&parse_document(text));
    if rendered == text {
        return RoundTrip::Stable;
    }

    let mut original_lines = text.split('\n');
    let mut rendered_lines = rendered.split('\n');
    let mut line = 1;
    loop {
        let a = original_lines.next();
        let b = rendered_lines.next();
        if a != b {
            return RoundTrip::Unstable {
                line,
                original: a.map(str::to_string),
                rendered: b.map(str::to_string),
            };
        }
        line += 1;
    }
}

/// Whether `blocks` decode back to themselves after encoding.
///
/// False for the shapes the flat form cannot carry: a document that is a
/// single empty text block, a video whose url is not an embed url, and
/// content containing line breaks or syntax prefixes.
pub fn is_stable(blocks: &[ContentBlock]) -> bool {
    parse_document(&render_document(blocks)) == blocks
}
