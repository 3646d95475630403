use serde::{Deserialize, Serialize};

/// Values of the `sound` field that classify a film as silent.
const SILENT_SOUND_VALUES: [&str; 2] = ["silent", "Silent, No Music"];

/// Collection memberships that classify a film as silent.
const SILENT_COLLECTIONS: [&str; 1] = ["silent_films"];

/// Tag elements that classify a film as silent. Compared as exact elements,
/// whitespace included.
const SILENT_TAGS: [&str; 3] = ["Silent", " silent", "silent"];

/// One film entry of the catalog file. Only `title` is required; catalogs
/// in the wild omit any of the other fields.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct FilmRecord {
    pub title: String,
    #[serde(default)]
    pub streams: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub collection: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sound: Option<String>,
}

impl FilmRecord {
    /// The first stream URI, used as the archive key and as the playback
    /// uri in results.
    pub fn primary_stream(&self) -> Option<&str> {
        self.streams.first().map(String::as_str)
    }

    /// Title with the pipe-delimited alternate form and the parenthetical
    /// suffix stripped.
    pub fn cleaned_title(&self) -> String {
        self.title
            .split('|')
            .next()
            .unwrap_or_default()
            .split('(')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    /// Whether the record classifies as a silent film. Collection and tag
    /// checks are exact-element membership, never substring matches.
    pub fn is_silent(&self) -> bool {
        if let Some(sound) = self.sound.as_deref() {
            if SILENT_SOUND_VALUES.contains(&sound) {
                return true;
            }
        }
        self.collection
            .iter()
            .any(|c| SILENT_COLLECTIONS.contains(&c.as_str()))
            || self.tags.iter().any(|t| SILENT_TAGS.contains(&t.as_str()))
    }
}
