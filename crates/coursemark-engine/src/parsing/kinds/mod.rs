pub mod bullet;
pub mod heading;
pub mod video_embed;

pub use bullet::Bullet;
pub use heading::{Heading, HeadingLevel};
pub use video_embed::VideoEmbed;
