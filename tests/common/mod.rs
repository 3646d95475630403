//! Shared fixtures for end-to-end tests.

use comedyfilms_skill::{load_archive, Archive, ComedyFilmsSkill, SkillConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const FATAL_GLASS_URI: &str =
    "https://archive.org/download/Fatal_Glass_of_Beer_1933/Fatal_Glass_of_Beer.mp4";
pub const FATAL_GLASS_ALT_URI: &str =
    "https://archive.org/download/fatal_glass_of_beer/fatal_glass_of_beer.mp4";
pub const GENERAL_URI: &str = "https://archive.org/download/The_General_1926/The_General.mp4";
pub const SAFETY_LAST_URI: &str = "https://archive.org/download/SafetyLast1923/SafetyLast.mp4";
pub const JEKYLL_URI: &str =
    "https://archive.org/download/DrJekyllAndMrHyde1920/DrJekyllAndMrHyde.mp4";

/// Five playable films (two black-and-white, three silent) and one record
/// without streams.
pub fn catalog_json() -> String {
    format!(
        r#"{{
        "{FATAL_GLASS_URI}": {{
            "title": "The Fatal Glass of Beer",
            "streams": ["{FATAL_GLASS_URI}"],
            "images": ["https://archive.org/download/Fatal_Glass_of_Beer_1933/Fatal_Glass_of_Beer.png"],
            "collection": ["comedy_films"],
            "tags": ["W.C. Fields", "comedy"],
            "sound": "sound"
        }},
        "{FATAL_GLASS_ALT_URI}": {{
            "title": "Fatal Glass of Beer",
            "streams": ["{FATAL_GLASS_ALT_URI}"],
            "images": [],
            "collection": ["comedy_films"],
            "tags": ["comedy"],
            "sound": "sound"
        }},
        "{GENERAL_URI}": {{
            "title": "The General (1926)",
            "streams": ["{GENERAL_URI}"],
            "images": ["https://archive.org/download/The_General_1926/The_General.png"],
            "collection": ["comedy_films"],
            "tags": ["Buster Keaton"],
            "sound": "silent"
        }},
        "{SAFETY_LAST_URI}": {{
            "title": "Safety Last! | Harold Lloyd (1923)",
            "streams": ["{SAFETY_LAST_URI}"],
            "collection": ["comedy_films"],
            "tags": ["Silent", "Harold Lloyd"]
        }},
        "{JEKYLL_URI}": {{
            "title": "Dr. Jekyll and Mr. Hyde: A Silent Film (1920)",
            "streams": ["{JEKYLL_URI}"],
            "collection": ["silent_films"]
        }},
        "lost-reel": {{
            "title": "The Lost Reel",
            "streams": []
        }}
    }}"#
    )
}

pub fn write_catalog(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Comedy_Films.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

pub fn test_archive() -> (TempDir, Archive) {
    let (dir, path) = write_catalog(&catalog_json());
    let archive = load_archive(path).unwrap();
    (dir, archive)
}

pub fn test_skill() -> (TempDir, ComedyFilmsSkill) {
    let (dir, archive) = test_archive();
    (dir, ComedyFilmsSkill::new(archive, SkillConfig::default()))
}
