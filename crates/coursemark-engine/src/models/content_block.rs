use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One entry of a bullet list block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "list-item")]
pub struct ListItem {
    pub content: String,
}

impl ListItem {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// A discrete unit of an editable course material document.
///
/// Each variant corresponds to one or more whole lines of the flat text form.
/// Serialized with a `type` tag carrying the editor's kind name
/// (`heading1`, `text`, `list`, `video`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// A line prefixed `# `
    Heading1 { content: String },
    /// A line prefixed `## `
    Heading2 { content: String },
    /// A line prefixed `### `
    Heading3 { content: String },
    /// Any line no other rule claims, kept verbatim
    Text { content: String },
    /// Consecutive `- ` / `* ` lines. Never empty once built.
    List { items: Vec<ListItem> },
    /// An embedded YouTube player
    Video { youtube_url: String },
}

impl ContentBlock {
    pub fn heading1(content: impl Into<String>) -> Self {
        Self::Heading1 {
            content: content.into(),
        }
    }

    pub fn heading2(content: impl Into<String>) -> Self {
        Self::Heading2 {
            content: content.into(),
        }
    }

    pub fn heading3(content: impl Into<String>) -> Self {
        Self::Heading3 {
            content: content.into(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    pub fn video(youtube_url: impl Into<String>) -> Self {
        Self::Video {
            youtube_url: youtube_url.into(),
        }
    }

    /// Build a list block from item contents.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List {
            items: items.into_iter().map(ListItem::new).collect(),
        }
    }

    /// An empty block of the given kind, as created by an "add block" action.
    pub fn empty(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Heading1 => Self::heading1(""),
            BlockKind::Heading2 => Self::heading2(""),
            BlockKind::Heading3 => Self::heading3(""),
            BlockKind::Text => Self::text(""),
            BlockKind::Video => Self::video(""),
        }
    }

    /// The editor's name for this block's kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Heading1 { .. } => "heading1",
            Self::Heading2 { .. } => "heading2",
            Self::Heading3 { .. } => "heading3",
            Self::Text { .. } => "text",
            Self::List { .. } => "list",
            Self::Video { .. } => "video",
        }
    }

    /// Mutable access to the single-line content of heading and text blocks.
    pub fn content_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Heading1 { content }
            | Self::Heading2 { content }
            | Self::Heading3 { content }
            | Self::Text { content } => Some(content),
            Self::List { .. } | Self::Video { .. } => None,
        }
    }

    pub fn items(&self) -> Option<&[ListItem]> {
        match self {
            Self::List { items } => Some(items),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }
}

/// Kinds of block an "add block" action can create.
///
/// Lists are absent on purpose: they only come into existence through
/// adding a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading1,
    Heading2,
    Heading3,
    Text,
    Video,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Heading1,
        BlockKind::Heading2,
        BlockKind::Heading3,
        BlockKind::Text,
        BlockKind::Video,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Heading1 => "heading1",
            BlockKind::Heading2 => "heading2",
            BlockKind::Heading3 => "heading3",
            BlockKind::Text => "text",
            BlockKind::Video => "video",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockKindError {
    #[error("Invalid block kind: {0}")]
    InvalidBlockKind(String),
}

impl FromStr for BlockKind {
    type Err = BlockKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| BlockKindError::InvalidBlockKind(s.to_string()))
    }
}
