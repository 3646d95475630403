//! Entity matching boundary with the host framework.

use crate::keywords::KeywordRegistration;
use std::collections::HashMap;

/// Keyword category name to the single best-matched string for that
/// category.
pub type Entities = HashMap<String, String>;

/// Extraction of keyword entities from a spoken phrase. The host framework
/// owns the real implementation; the skill only consumes its output.
pub trait EntityMatcher: Send + Sync {
    fn match_entities(&self, phrase: &str) -> Entities;
}

/// Matches nothing. Stands in when the host performs its own extraction
/// and calls the skill with ready-made entities.
pub struct NoopMatcher;

impl EntityMatcher for NoopMatcher {
    fn match_entities(&self, _phrase: &str) -> Entities {
        Entities::new()
    }
}

/// Case-insensitive substring matcher over the registered keyword lists.
/// For each category the longest registered name occurring in the phrase
/// wins. Used by the CLI tools and tests.
pub struct KeywordMatcher {
    categories: Vec<(String, Vec<String>)>,
}

impl KeywordMatcher {
    pub fn from_registrations(registrations: &[KeywordRegistration]) -> KeywordMatcher {
        let categories = registrations
            .iter()
            .map(|r| (r.category.to_owned(), r.names.clone()))
            .collect();
        KeywordMatcher { categories }
    }
}

impl EntityMatcher for KeywordMatcher {
    fn match_entities(&self, phrase: &str) -> Entities {
        let phrase = phrase.to_lowercase();
        let mut entities = Entities::new();
        for (category, names) in self.categories.iter() {
            let best = names
                .iter()
                .filter(|name| !name.is_empty() && phrase.contains(&name.to_lowercase()))
                .max_by_key(|name| name.len());
            if let Some(best) = best {
                entities.insert(category.clone(), best.clone());
            }
        }
        entities
    }
}
