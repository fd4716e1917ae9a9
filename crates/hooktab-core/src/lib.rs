pub mod event;
pub mod mode;
pub mod note;
pub mod section;
pub mod song;

pub use event::ChordEvent;
pub use mode::Mode;
pub use section::SectionType;
pub use song::{Inversion, SongMetadata};

pub type SongId = u64;
