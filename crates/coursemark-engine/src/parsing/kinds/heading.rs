/// The three heading depths the editor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

/// Heading block type with owned prefix constants.
///
/// Only exact `#`, `##` and `###` prefixes followed by a single space count.
/// Anything deeper (`####`) is not a heading and stays text.
pub struct Heading;

impl Heading {
    pub const H1_PREFIX: &'static str = "# ";
    pub const H2_PREFIX: &'static str = "## ";
    pub const H3_PREFIX: &'static str = "### ";

    /// Strips a heading prefix, testing levels 1, 2, 3 in that order.
    pub fn strip(line: &str) -> Option<(HeadingLevel, &str)> {
        if let Some(rest) = line.strip_prefix(Self::H1_PREFIX) {
            Some((HeadingLevel::H1, rest))
        } else if let Some(rest) = line.strip_prefix(Self::H2_PREFIX) {
            Some((HeadingLevel::H2, rest))
        } else {
            line.strip_prefix(Self::H3_PREFIX)
                .map(|rest| (HeadingLevel::H3, rest))
        }
    }

    pub fn prefix(level: HeadingLevel) -> &'static str {
        match level {
            HeadingLevel::H1 => Self::H1_PREFIX,
            HeadingLevel::H2 => Self::H2_PREFIX,
            HeadingLevel::H3 => Self::H3_PREFIX,
        }
    }
}
