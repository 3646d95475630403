mod matcher;
mod results;

pub use matcher::{Entities, EntityMatcher, KeywordMatcher, NoopMatcher};
pub use results::{MediaKind, MediaResult, PlaybackKind, PlaylistResult, SearchHit};
