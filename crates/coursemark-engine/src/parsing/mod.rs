//! # Decoding
//!
//! Turns a stored course material document into content blocks.
//!
//! 1. **Line Classification** (`classify`): each `\n`-separated line becomes a
//!    `LineClass` (heading, bullet, video embed or text)
//! 2. **Block Construction** (`builder`): a `BlockBuilder` groups adjacent
//!    bullets into lists and emits `ContentBlock`s in line order
//!
//! Syntax knowledge (prefixes, embed markup) lives in `kinds` and is shared
//! with rendering.

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};

use crate::models::ContentBlock;

/// Decodes a flat text document into blocks.
///
/// An empty string means "no content yet" and yields no blocks, unlike a
/// document of blank lines which yields one empty text block per line.
pub fn parse_document(text: &str) -> Vec<ContentBlock> {
    if text.is_empty() {
        return vec![];
    }

    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for line in text.split('\n') {
        let lc = classifier.classify(line);
        log::trace!("classified {lc:?}");
        builder.push(&lc);
    }

    let blocks = builder.finish();
    log::debug!(
        "decoded {} bytes into {} blocks",
        text.len(),
        blocks.len()
    );
    blocks
}
