//! The skill context object: archive, keyword index and result identity.

use crate::catalog::{Archive, FilmRecord};
use crate::keywords::{
    KeywordIndex, KeywordRegistration, BW_MOVIE_NAME, MOVIE_STREAMING_PROVIDER, SILENT_MOVIE_NAME,
};
use crate::search::{
    Entities, EntityMatcher, KeywordMatcher, MediaKind, MediaResult, PlaybackKind, PlaylistResult,
    SearchHit,
};
use tracing::info;

pub const PLAYLIST_TITLE: &str = "Vintage Comedy Films (Movie Playlist)";
pub const PLAYLIST_AUTHOR: &str = "Vintage Comedy Films";

const DEFAULT_SKILL_ID: &str = "skill-comedyfilms.openvoiceos";
const DEFAULT_SKILL_ICON: &str =
    "https://github.com/OpenVoiceOS/ovos-ocp-audio-plugin/raw/master/ovos_plugin_common_play/ocp/res/ui/images/ocp.png";

const FEATURED_CONFIDENCE: u8 = 70;
const DEFAULT_PLAYLIST_SCORE: u8 = 50;
const DEFAULT_PLAYLIST_LIMIT: usize = 25;

/// Identity the hosting context injects verbatim into every result.
#[derive(Debug, Clone)]
pub struct SkillConfig {
    pub skill_id: String,
    pub skill_icon: String,
}

impl Default for SkillConfig {
    fn default() -> Self {
        SkillConfig {
            skill_id: DEFAULT_SKILL_ID.to_owned(),
            skill_icon: DEFAULT_SKILL_ICON.to_owned(),
        }
    }
}

/// Capability interface a host holds to invoke the skill without coupling
/// to the concrete type.
pub trait MediaSkill: Send + Sync {
    fn search_media(&self, phrase: &str, media_type: MediaKind) -> Vec<SearchHit>;
    fn featured(&self) -> Vec<MediaResult>;
}

/// Vintage comedy films skill: loads once, then answers searches from
/// immutable state. Concurrent calls are safe, nothing mutates after
/// construction.
pub struct ComedyFilmsSkill {
    archive: Archive,
    keywords: KeywordIndex,
    config: SkillConfig,
    matcher: Box<dyn EntityMatcher>,
}

impl ComedyFilmsSkill {
    pub fn new(archive: Archive, config: SkillConfig) -> ComedyFilmsSkill {
        let keywords = KeywordIndex::derive(&archive);
        let matcher = Box::new(KeywordMatcher::from_registrations(keywords.registrations()));
        info!(
            "Skill {} ready: {} films, {} black-and-white names, {} silent names",
            config.skill_id,
            archive.len(),
            keywords.names(BW_MOVIE_NAME).map_or(0, |n| n.len()),
            keywords.names(SILENT_MOVIE_NAME).map_or(0, |n| n.len()),
        );
        ComedyFilmsSkill {
            archive,
            keywords,
            config,
            matcher,
        }
    }

    /// Replaces the built-in keyword matcher with the host's extractor.
    pub fn with_matcher(mut self, matcher: Box<dyn EntityMatcher>) -> ComedyFilmsSkill {
        self.matcher = matcher;
        self
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    /// The keyword lists a host registers with its entity matcher.
    pub fn registrations(&self) -> &[KeywordRegistration] {
        self.keywords.registrations()
    }

    /// Matches entities in the phrase, then scores and yields candidates.
    pub fn search(
        &self,
        phrase: &str,
        media_type: MediaKind,
    ) -> impl Iterator<Item = SearchHit> + '_ {
        let entities = self.matcher.match_entities(phrase);
        self.search_with_entities(media_type, entities)
    }

    /// Scores and yields candidates for entities the host has already
    /// extracted from the phrase. Every call recomputes from scratch.
    pub fn search_with_entities(
        &self,
        media_type: MediaKind,
        entities: Entities,
    ) -> impl Iterator<Item = SearchHit> + '_ {
        let mut score: u32 = match media_type {
            MediaKind::Movie | MediaKind::BlackWhiteMovie => 15,
            _ => 0,
        };
        score += 30 * entities.len() as u32;

        let provider_matched = entities.contains_key(MOVIE_STREAMING_PROVIDER);

        let (kind, needle) = if let Some(name) = entities.get(BW_MOVIE_NAME) {
            score += 20;
            (MediaKind::BlackWhiteMovie, Some(name.to_lowercase()))
        } else if let Some(name) = entities.get(SILENT_MOVIE_NAME) {
            score += 25;
            (MediaKind::SilentMovie, Some(name.to_lowercase()))
        } else {
            (media_type, None)
        };

        let confidence = score.min(100) as u8;

        let title_hits = needle.into_iter().flat_map(move |needle| {
            self.archive
                .iter()
                .filter(move |film| film.title.to_lowercase().contains(needle.as_str()))
                .map(move |film| SearchHit::Media(self.media_result(film, confidence, kind)))
        });

        let playlist_hit = if provider_matched {
            Some(SearchHit::Playlist(
                self.get_playlist(DEFAULT_PLAYLIST_SCORE, DEFAULT_PLAYLIST_LIMIT),
            ))
        } else {
            None
        };

        title_hits.chain(playlist_hit)
    }

    /// Every film of the archive as a generic movie candidate, in archive
    /// order.
    pub fn featured_media(&self) -> Vec<MediaResult> {
        self.archive
            .iter()
            .map(|film| self.media_result(film, FEATURED_CONFIDENCE, MediaKind::Movie))
            .collect()
    }

    /// The first `limit` featured entries wrapped as a playlist. An empty
    /// archive yields an empty playlist, not an error.
    pub fn get_playlist(&self, score: u8, limit: usize) -> PlaylistResult {
        let entries = self.featured_media().into_iter().take(limit).collect();
        PlaylistResult {
            title: PLAYLIST_TITLE.to_owned(),
            author: PLAYLIST_AUTHOR.to_owned(),
            match_confidence: score,
            media_type: MediaKind::Movie,
            playback: PlaybackKind::Video,
            skill_icon: self.config.skill_icon.clone(),
            image: self.config.skill_icon.clone(),
            playlist: entries,
        }
    }

    fn media_result(&self, film: &FilmRecord, confidence: u8, kind: MediaKind) -> MediaResult {
        MediaResult {
            title: film.title.clone(),
            match_confidence: confidence,
            media_type: kind,
            uri: film.primary_stream().unwrap_or_default().to_owned(),
            playback: PlaybackKind::Video,
            skill_icon: self.config.skill_icon.clone(),
            skill_id: self.config.skill_id.clone(),
            image: film
                .images
                .first()
                .cloned()
                .unwrap_or_else(|| self.config.skill_icon.clone()),
        }
    }
}

impl MediaSkill for ComedyFilmsSkill {
    fn search_media(&self, phrase: &str, media_type: MediaKind) -> Vec<SearchHit> {
        self.search(phrase, media_type).collect()
    }

    fn featured(&self) -> Vec<MediaResult> {
        self.featured_media()
    }
}
