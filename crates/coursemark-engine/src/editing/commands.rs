use serde::{Deserialize, Serialize};

use crate::models::{BlockKind, ContentBlock, ListItem};
use crate::youtube::normalize_youtube_url;

/// Commands that can be applied to the document
///
/// Indices refer to the block sequence as it is when the command runs;
/// removals shift everything after the removed block or item down by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Cmd {
    /// Append an empty block of the given kind
    AddBlock { kind: BlockKind },
    /// Append an empty item to a trailing list, or start a new list
    AddListItem,
    /// Remove a whole block, or one item of a list block
    RemoveBlock {
        block: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item: Option<usize>,
    },
    /// Append a video block with a normalized url
    AddVideoBlock { url: String },
    /// Replace the url of an existing video block, normalizing it
    SetVideoUrl { block: usize, url: String },
    /// Replace the content of a heading or text block
    SetContent { block: usize, text: String },
    /// Replace the content of one list item
    SetItemContent {
        block: usize,
        item: usize,
        text: String,
    },
}

/// Apply a command to a block sequence, returning whether anything changed.
///
/// Commands naming a block or item that does not exist, or a block of the
/// wrong kind, leave the sequence untouched.
pub(crate) fn apply_command(blocks: &mut Vec<ContentBlock>, cmd: &Cmd) -> bool {
    match cmd {
        Cmd::AddBlock { kind } => {
            blocks.push(ContentBlock::empty(*kind));
            true
        }
        Cmd::AddListItem => {
            match blocks.last_mut() {
                Some(ContentBlock::List { items }) => items.push(ListItem::default()),
                _ => blocks.push(ContentBlock::List {
                    items: vec![ListItem::default()],
                }),
            }
            true
        }
        Cmd::RemoveBlock { block, item: None } => {
            if *block < blocks.len() {
                blocks.remove(*block);
                merge_lists_at(blocks, *block);
                true
            } else {
                false
            }
        }
        Cmd::RemoveBlock {
            block,
            item: Some(item),
        } => remove_list_item(blocks, *block, *item),
        Cmd::AddVideoBlock { url } => {
            blocks.push(ContentBlock::video(normalize_youtube_url(url)));
            true
        }
        Cmd::SetVideoUrl { block, url } => match blocks.get_mut(*block) {
            Some(ContentBlock::Video { youtube_url }) => {
                *youtube_url = normalize_youtube_url(url);
                true
            }
            _ => false,
        },
        Cmd::SetContent { block, text } => {
            match blocks.get_mut(*block).and_then(ContentBlock::content_mut) {
                Some(content) => {
                    content.clone_from(text);
                    true
                }
                None => false,
            }
        }
        Cmd::SetItemContent { block, item, text } => match blocks.get_mut(*block) {
            Some(ContentBlock::List { items }) => match items.get_mut(*item) {
                Some(list_item) => {
                    list_item.content.clone_from(text);
                    true
                }
                None => false,
            },
            _ => false,
        },
    }
}

/// Removes one list item, dropping the list itself once it is empty.
fn remove_list_item(blocks: &mut Vec<ContentBlock>, block: usize, item: usize) -> bool {
    let now_empty = match blocks.get_mut(block) {
        Some(ContentBlock::List { items }) if item < items.len() => {
            items.remove(item);
            items.is_empty()
        }
        _ => return false,
    };

    if now_empty {
        blocks.remove(block);
        merge_lists_at(blocks, block);
    }
    true
}

/// Drops lists without items and joins lists left next to each other.
///
/// Brings a block sequence built outside of `Cmd` (decoded JSON, hand-built
/// vectors) to the shape the flat form can carry.
pub(crate) fn tidy_lists(blocks: &mut Vec<ContentBlock>) {
    let before = blocks.len();
    blocks.retain(|block| block.items().is_none_or(|items| !items.is_empty()));
    for at in (1..blocks.len()).rev() {
        merge_lists_at(blocks, at);
    }
    if blocks.len() != before {
        log::debug!("tidied lists: {before} blocks down to {}", blocks.len());
    }
}

/// Joins the list at `at` onto a list directly before it.
///
/// Removing the block between two lists would otherwise leave two list
/// blocks that save as one run of bullet lines and load back as one list.
fn merge_lists_at(blocks: &mut Vec<ContentBlock>, at: usize) {
    if at == 0 || at >= blocks.len() {
        return;
    }
    if !(blocks[at - 1].is_list() && blocks[at].is_list()) {
        return;
    }
    if let ContentBlock::List { items: tail } = blocks.remove(at)
        && let Some(ContentBlock::List { items }) = blocks.get_mut(at - 1)
    {
        items.extend(tail);
    }
}
