//! Vintage Comedy Films Skill Library
//!
//! Answers spoken requests for vintage black-and-white and silent comedy
//! films: loads a static JSON catalog, derives keyword lists for the host
//! framework's entity matcher and scores ranked playback candidates for a
//! phrase. This library exposes the internal modules for testing and for
//! embedding into a host runtime.

pub mod catalog;
pub mod keywords;
pub mod search;
pub mod skill;

// Re-export commonly used types for convenience
pub use catalog::{load_archive, Archive, CatalogError, FilmRecord};
pub use keywords::{KeywordIndex, KeywordRegistration};
pub use search::{
    Entities, EntityMatcher, KeywordMatcher, MediaKind, MediaResult, NoopMatcher, PlaybackKind,
    PlaylistResult, SearchHit,
};
pub use skill::{ComedyFilmsSkill, MediaSkill, SkillConfig};
