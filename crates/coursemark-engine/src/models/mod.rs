pub mod content_block;

pub use content_block::{BlockKind, BlockKindError, ContentBlock, ListItem};
