use crate::models::{ContentBlock, ListItem};

use super::{classify::LineClass, kinds::HeadingLevel};

/// Phase 2 of decoding: turns classified lines into blocks.
///
/// The only cross-line state is the open list grouping, which lives here
/// for the duration of one decode call.
pub struct BlockBuilder {
    /// Index into `out` of the list collecting bullet lines, if any.
    open_list: Option<usize>,
    out: Vec<ContentBlock>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open_list: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        match *c {
            LineClass::Bullet { content } => {
                self.push_list_item(content);
                return;
            }
            LineClass::Heading { level, content } => {
                let content = content.to_string();
                self.out.push(match level {
                    HeadingLevel::H1 => ContentBlock::Heading1 { content },
                    HeadingLevel::H2 => ContentBlock::Heading2 { content },
                    HeadingLevel::H3 => ContentBlock::Heading3 { content },
                });
            }
            LineClass::Video { url } => self.out.push(ContentBlock::video(url)),
            LineClass::Text { line } => self.out.push(ContentBlock::text(line)),
        }
        self.open_list = None;
    }

    pub fn finish(self) -> Vec<ContentBlock> {
        self.out
    }

    fn push_list_item(&mut self, content: &str) {
        let idx = match self.open_list {
            Some(idx) => idx,
            None => {
                self.out.push(ContentBlock::List { items: vec![] });
                let idx = self.out.len() - 1;
                self.open_list = Some(idx);
                idx
            }
        };

        if let Some(ContentBlock::List { items }) = self.out.get_mut(idx) {
            items.push(ListItem::new(content));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
