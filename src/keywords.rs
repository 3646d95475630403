//! Keyword lists derived from the catalog for the host entity matcher.

use crate::catalog::Archive;
use crate::search::MediaKind;

/// Keyword category for black-and-white film names.
pub const BW_MOVIE_NAME: &str = "bw_movie_name";

/// Keyword category for silent film names.
pub const SILENT_MOVIE_NAME: &str = "silent_movie_name";

/// Keyword category for requests that target the provider rather than a
/// specific film.
pub const MOVIE_STREAMING_PROVIDER: &str = "movie_streaming_provider";

/// Names this skill answers to as a streaming provider.
pub const PROVIDER_NAMES: [&str; 4] = [
    "ComedyFilms",
    "Comedy Films",
    "Classic Comedy Films",
    "Vintage Comedy Films",
];

/// One keyword list to register with the host entity matcher.
#[derive(Debug, Clone)]
pub struct KeywordRegistration {
    pub media_kind: MediaKind,
    pub category: &'static str,
    pub names: Vec<String>,
}

/// The three keyword registrations of the skill, derived once per loaded
/// catalog and immutable afterwards.
#[derive(Debug)]
pub struct KeywordIndex {
    registrations: Vec<KeywordRegistration>,
}

fn push_name_variants(names: &mut Vec<String>, title: &str) {
    names.push(title.to_owned());
    if let Some((head, tail)) = title.split_once(':') {
        names.push(head.trim().to_owned());
        names.push(tail.trim().to_owned());
    }
}

impl KeywordIndex {
    /// Partitions the catalog titles into black-and-white and silent name
    /// lists. The partition is binary: every non-silent film counts as
    /// black-and-white. Titles containing a colon also contribute their
    /// two colon-split halves. The lists may contain duplicates.
    pub fn derive(archive: &Archive) -> KeywordIndex {
        let mut bw_names = vec![];
        let mut silent_names = vec![];

        for film in archive.iter() {
            let title = film.cleaned_title();
            if film.is_silent() {
                push_name_variants(&mut silent_names, &title);
            } else {
                push_name_variants(&mut bw_names, &title);
            }
        }

        let registrations = vec![
            KeywordRegistration {
                media_kind: MediaKind::BlackWhiteMovie,
                category: BW_MOVIE_NAME,
                names: bw_names,
            },
            KeywordRegistration {
                media_kind: MediaKind::SilentMovie,
                category: SILENT_MOVIE_NAME,
                names: silent_names,
            },
            KeywordRegistration {
                media_kind: MediaKind::Movie,
                category: MOVIE_STREAMING_PROVIDER,
                names: PROVIDER_NAMES.iter().map(|s| s.to_string()).collect(),
            },
        ];

        KeywordIndex { registrations }
    }

    pub fn registrations(&self) -> &[KeywordRegistration] {
        &self.registrations
    }

    /// The registered names for one category.
    pub fn names(&self, category: &str) -> Option<&[String]> {
        self.registrations
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.names.as_slice())
    }
}
