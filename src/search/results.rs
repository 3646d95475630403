//! Result types handed back to the host framework.

use serde::Serialize;

/// Host framework media classification, with the host's wire discriminants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum MediaKind {
    Generic = 0,
    Movie = 10,
    SilentMovie = 18,
    BlackWhiteMovie = 20,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum PlaybackKind {
    Video = 1,
    Audio = 2,
    Undefined = 100,
}

/// One ranked playback candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaResult {
    pub title: String,
    /// Confidence in [0, 100]; the host ranks competing skills with it.
    pub match_confidence: u8,
    pub media_type: MediaKind,
    pub uri: String,
    pub playback: PlaybackKind,
    pub skill_icon: String,
    pub skill_id: String,
    /// First catalog image, or the skill icon when the record has none.
    pub image: String,
}

/// Playlist synthesized from the featured media when a request targets the
/// provider itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistResult {
    pub title: String,
    pub author: String,
    pub match_confidence: u8,
    pub media_type: MediaKind,
    pub playback: PlaybackKind,
    pub skill_icon: String,
    pub image: String,
    pub playlist: Vec<MediaResult>,
}

/// A single search entry: either a direct media candidate or a synthesized
/// playlist. Serializes untagged so both reach the host bus as plain
/// result objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchHit {
    Media(MediaResult),
    Playlist(PlaylistResult),
}

impl SearchHit {
    pub fn match_confidence(&self) -> u8 {
        match self {
            SearchHit::Media(media) => media.match_confidence,
            SearchHit::Playlist(playlist) => playlist.match_confidence,
        }
    }

    pub fn media_type(&self) -> MediaKind {
        match self {
            SearchHit::Media(media) => media.media_type,
            SearchHit::Playlist(playlist) => playlist.media_type,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SearchHit::Media(media) => &media.title,
            SearchHit::Playlist(playlist) => &playlist.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_result_serializes_as_flat_object() {
        let hit = SearchHit::Media(MediaResult {
            title: "The Fatal Glass of Beer".to_owned(),
            match_confidence: 65,
            media_type: MediaKind::BlackWhiteMovie,
            uri: "https://example.org/fgob.mp4".to_owned(),
            playback: PlaybackKind::Video,
            skill_icon: "icon.png".to_owned(),
            skill_id: "skill-comedyfilms.openvoiceos".to_owned(),
            image: "https://example.org/fgob.png".to_owned(),
        });

        let value = serde_json::to_value(&hit).unwrap();
        assert_eq!(value["title"], "The Fatal Glass of Beer");
        assert_eq!(value["match_confidence"], 65);
        assert_eq!(value["media_type"], "BlackWhiteMovie");
        assert_eq!(value["playback"], "Video");
        assert!(value.get("Media").is_none(), "hits must serialize untagged");
    }
}
