use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

use comedyfilms_skill::{load_archive, ComedyFilmsSkill, MediaKind, SearchHit, SkillConfig};

fn parse_catalog_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s).canonicalize()?;
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

fn parse_media_kind(s: &str) -> Result<MediaKind, String> {
    match s {
        "generic" => Ok(MediaKind::Generic),
        "movie" => Ok(MediaKind::Movie),
        "silent" => Ok(MediaKind::SilentMovie),
        "bw" => Ok(MediaKind::BlackWhiteMovie),
        other => Err(format!(
            "Unknown media kind \"{other}\", expected one of: generic, movie, silent, bw"
        )),
    }
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON film catalog.
    #[clap(value_parser = parse_catalog_path)]
    pub path: PathBuf,

    /// Requested media kind to score against.
    #[clap(long, default_value = "movie", value_parser = parse_media_kind)]
    pub media_type: MediaKind,
}

fn print_hit(hit: &SearchHit) {
    match hit {
        SearchHit::Media(media) => {
            println!(
                "{} -> {:?} {} - {}",
                media.title, media.media_type, media.match_confidence, media.uri,
            );
        }
        SearchHit::Playlist(playlist) => {
            println!(
                "{} ({} entries) -> {:?} {}",
                playlist.title,
                playlist.playlist.len(),
                playlist.media_type,
                playlist.match_confidence,
            );
        }
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    println!(
        "Cli Search loading catalog at {}...",
        cli_args.path.display()
    );

    let archive = load_archive(&cli_args.path).context("Could not load the film catalog")?;
    let skill = ComedyFilmsSkill::new(archive, SkillConfig::default());
    println!("Done!");

    loop {
        println!("Please enter your search phrase:");

        let mut user_input = String::new();

        io::stdin()
            .read_line(&mut user_input)
            .expect("Failed to read line");

        let user_input = user_input.trim();

        let results: Vec<SearchHit> = skill.search(user_input, cli_args.media_type).collect();
        if results.is_empty() {
            println!("No matches found for \"{}\".", user_input);
        } else {
            println!("Found {} matches for \"{}\":\n", results.len(), user_input);
            for result in results.iter() {
                print_hit(result);
            }
        }
        println!("\n");
    }
}
