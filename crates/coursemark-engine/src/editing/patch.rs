/// Result of applying a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Patch {
    /// False when the command named nothing that exists
    pub changed: bool,
    pub version: u64,
}
