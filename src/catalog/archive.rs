use super::FilmRecord;
use std::collections::HashMap;

/// Non-fatal issue encountered while building the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// Record excluded because it has no playable streams.
    NoStreams { title: String },
    /// Two records share the same primary stream; the later one replaced
    /// the earlier, keeping the earlier position.
    DuplicateStream { uri: String },
}

/// Mapping from primary stream URI to film record, read-only after build.
/// Iteration yields films in insertion order, which also defines the
/// featured media order.
#[derive(Debug, Default)]
pub struct Archive {
    films: Vec<FilmRecord>,
    index: HashMap<String, usize>,
}

pub struct ArchiveBuildResult {
    pub archive: Archive,
    pub problems: Vec<Problem>,
}

impl Archive {
    pub fn build<I>(records: I) -> ArchiveBuildResult
    where
        I: IntoIterator<Item = FilmRecord>,
    {
        let mut films: Vec<FilmRecord> = vec![];
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut problems = vec![];

        for record in records {
            let uri = match record.primary_stream() {
                Some(uri) => uri.to_owned(),
                None => {
                    problems.push(Problem::NoStreams {
                        title: record.title.clone(),
                    });
                    continue;
                }
            };
            match index.get(&uri) {
                Some(&slot) => {
                    problems.push(Problem::DuplicateStream { uri });
                    films[slot] = record;
                }
                None => {
                    index.insert(uri, films.len());
                    films.push(record);
                }
            }
        }

        ArchiveBuildResult {
            archive: Archive { films, index },
            problems,
        }
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    pub fn get(&self, uri: &str) -> Option<&FilmRecord> {
        self.index.get(uri).map(|&slot| &self.films[slot])
    }

    /// Films in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FilmRecord> {
        self.films.iter()
    }
}
