/// Bullet list item markers.
///
/// Both `- ` and `* ` are read, only `- ` is written.
pub struct Bullet;

impl Bullet {
    pub const DASH: &'static str = "- ";
    pub const ASTERISK: &'static str = "* ";

    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::DASH)
            .or_else(|| line.strip_prefix(Self::ASTERISK))
    }
}
