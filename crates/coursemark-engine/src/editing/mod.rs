/*!
 * # Editing Core
 *
 * The editor works on a decoded block sequence, not on the stored text.
 *
 * ## Edit Loop
 *
 * 1. **Load**: `Document::from_text` decodes the stored document
 * 2. **Edit**: every change is a `Cmd` applied through `Document::apply`
 *    (or one of the convenience methods wrapping it), returning a `Patch`
 * 3. **Save**: `Document::to_text` encodes the blocks again
 *
 * Commands are plain serde values so a frontend can ship them as JSON.
 *
 * ## Module Structure
 *
 * - **`document`**: `Document`, the owned block sequence and its version
 * - **`commands`**: `Cmd` enum and the logic applying each command
 * - **`patch`**: what an applied command changed
 */

pub mod commands;
pub mod document;
pub mod patch;

pub use commands::Cmd;
pub use document::Document;
pub use patch::Patch;
