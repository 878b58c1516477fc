//! Load/save stability for documents built through editing commands.

use coursemark_engine::{BlockKind, Cmd, ContentBlock, Document, is_stable, parse_document};
use proptest::prelude::*;

/// Single-line content without syntax a line classifier would reinterpret.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 .,!?]{0,20}"
}

fn video_link() -> impl Strategy<Value = String> {
    let id = "[a-zA-Z0-9_-]{11}";
    prop_oneof![
        id.prop_map(|id| format!("https://www.youtube.com/watch?v={id}")),
        id.prop_map(|id| format!("https://youtu.be/{id}")),
        id.prop_map(|id| format!("https://www.youtube.com/embed/{id}")),
    ]
}

fn text_kind() -> impl Strategy<Value = BlockKind> {
    prop_oneof![
        Just(BlockKind::Heading1),
        Just(BlockKind::Heading2),
        Just(BlockKind::Heading3),
        Just(BlockKind::Text),
    ]
}

fn command() -> impl Strategy<Value = Cmd> {
    prop_oneof![
        text_kind().prop_map(|kind| Cmd::AddBlock { kind }),
        Just(Cmd::AddListItem),
        (0usize..8, proptest::option::of(0usize..4))
            .prop_map(|(block, item)| Cmd::RemoveBlock { block, item }),
        video_link().prop_map(|url| Cmd::AddVideoBlock { url }),
        (0usize..8, video_link()).prop_map(|(block, url)| Cmd::SetVideoUrl { block, url }),
        (0usize..8, plain_text()).prop_map(|(block, text)| Cmd::SetContent { block, text }),
        (0usize..8, 0usize..4, plain_text())
            .prop_map(|(block, item, text)| Cmd::SetItemContent { block, item, text }),
    ]
}

/// The flat form has no way to tell a lone empty text block from no content.
fn is_lone_empty_text(blocks: &[ContentBlock]) -> bool {
    matches!(blocks, [ContentBlock::Text { content }] if content.is_empty())
}

proptest! {
    #[test]
    fn edited_documents_survive_save_and_load(cmds in proptest::collection::vec(command(), 0..24)) {
        let mut doc = Document::new();
        for cmd in cmds {
            doc.apply(cmd);
        }
        prop_assume!(!is_lone_empty_text(doc.blocks()));

        let reloaded = parse_document(&doc.to_text());
        prop_assert_eq!(reloaded.as_slice(), doc.blocks());
        prop_assert!(is_stable(doc.blocks()));
    }

    #[test]
    fn lists_are_never_empty(cmds in proptest::collection::vec(command(), 0..24)) {
        let mut doc = Document::new();
        for cmd in cmds {
            doc.apply(cmd);
            for block in doc.blocks() {
                if let Some(items) = block.items() {
                    prop_assert!(!items.is_empty());
                }
            }
        }
    }

    #[test]
    fn decoding_is_idempotent_after_one_save(text in "[-*# a-z\n]{0,60}") {
        let once = Document::from_text(&text).to_text();
        let twice = Document::from_text(&once).to_text();
        prop_assert_eq!(once, twice);
    }
}
