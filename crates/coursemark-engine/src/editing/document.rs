use crate::editing::commands::{apply_command, tidy_lists};
use crate::editing::{Cmd, Patch};
use crate::models::{BlockKind, ContentBlock};
use crate::parsing::parse_document;
use crate::rendering::render_document;

/// The in-memory editing state of one course material document.
///
/// Holds the ordered block sequence between a load (`from_text`) and a save
/// (`to_text`). Every mutation goes through a [`Cmd`], so list invariants are
/// kept on each edit, not only when decoding:
///
/// - a `List` block is never left without items
/// - removals never leave two `List` blocks next to each other
/// - an index that names nothing is a no-op, never a panic
///
/// ## Usage Pattern
///
/// ```rust
/// # use coursemark_engine::{Document, BlockKind};
/// let mut doc = Document::from_text("# Intro\n- first");
///
/// doc.add_list_item();
/// doc.set_item_content(1, 1, "second");
/// doc.add_block(BlockKind::Text);
/// doc.set_content(2, "Thanks for reading.");
///
/// assert_eq!(doc.to_text(), "# Intro\n- first\n- second\nThanks for reading.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<ContentBlock>,
    /// Incremented on each command that changed the blocks
    version: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stored document
    pub fn from_text(text: &str) -> Self {
        Self::from_blocks(parse_document(text))
    }

    /// Take ownership of blocks built elsewhere.
    ///
    /// Lists without items are dropped and adjacent lists joined, so the
    /// blocks match what a save and reload would produce.
    pub fn from_blocks(mut blocks: Vec<ContentBlock>) -> Self {
        tidy_lists(&mut blocks);
        Self { blocks, version: 0 }
    }

    /// Encode the current blocks for storage
    pub fn to_text(&self) -> String {
        render_document(&self.blocks)
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<ContentBlock> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the current version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply command to document
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let changed = apply_command(&mut self.blocks, &cmd);
        if changed {
            self.version += 1;
            log::debug!("applied {cmd:?}, now {} blocks (v{})", self.blocks.len(), self.version);
        } else {
            log::debug!("ignored {cmd:?}: no matching target");
        }

        Patch {
            changed,
            version: self.version,
        }
    }

    pub fn add_block(&mut self, kind: BlockKind) -> Patch {
        self.apply(Cmd::AddBlock { kind })
    }

    pub fn add_list_item(&mut self) -> Patch {
        self.apply(Cmd::AddListItem)
    }

    /// Remove the block at `block`, or only item `item` of that list block.
    ///
    /// Indices after the removed element shift down; re-read them afterwards.
    pub fn remove_block(&mut self, block: usize, item: Option<usize>) -> Patch {
        self.apply(Cmd::RemoveBlock { block, item })
    }

    pub fn add_video_block(&mut self, url: &str) -> Patch {
        self.apply(Cmd::AddVideoBlock {
            url: url.to_string(),
        })
    }

    pub fn set_video_url(&mut self, block: usize, url: &str) -> Patch {
        self.apply(Cmd::SetVideoUrl {
            block,
            url: url.to_string(),
        })
    }

    pub fn set_content(&mut self, block: usize, text: &str) -> Patch {
        self.apply(Cmd::SetContent {
            block,
            text: text.to_string(),
        })
    }

    pub fn set_item_content(&mut self, block: usize, item: usize, text: &str) -> Patch {
        self.apply(Cmd::SetItemContent {
            block,
            item,
            text: text.to_string(),
        })
    }
}

impl From<Vec<ContentBlock>> for Document {
    fn from(blocks: Vec<ContentBlock>) -> Self {
        Self::from_blocks(blocks)
    }
}
