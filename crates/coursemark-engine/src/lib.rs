pub mod editing;
pub mod models;
pub mod parsing;
pub mod rendering;
pub mod youtube;

// Re-export key types for easier usage
pub use editing::{Cmd, Document, Patch};
pub use models::{BlockKind, BlockKindError, ContentBlock, ListItem};
pub use parsing::parse_document;
pub use rendering::{RoundTrip, check_round_trip, is_stable, render_document};
pub use youtube::{extract_youtube_id, normalize_youtube_url};
