use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use comedyfilms_skill::{load_archive, ComedyFilmsSkill, SkillConfig};

fn parse_catalog_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s).canonicalize()?;
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON film catalog.
    #[clap(value_parser = parse_catalog_path)]
    pub catalog_path: PathBuf,

    /// Identifier embedded in every result.
    #[clap(long)]
    pub skill_id: Option<String>,

    /// Icon path or URL embedded in every result.
    #[clap(long)]
    pub skill_icon: Option<String>,

    /// Validate the catalog and exit.
    #[clap(long)]
    pub check_only: bool,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    info!("Loading catalog at {:?}...", cli_args.catalog_path);
    let archive =
        load_archive(&cli_args.catalog_path).context("Could not load the film catalog")?;

    if cli_args.check_only {
        info!("Catalog checked.");
        return Ok(());
    }

    let mut config = SkillConfig::default();
    if let Some(skill_id) = cli_args.skill_id {
        config.skill_id = skill_id;
    }
    if let Some(skill_icon) = cli_args.skill_icon {
        config.skill_icon = skill_icon;
    }

    let skill = ComedyFilmsSkill::new(archive, config);
    for registration in skill.registrations() {
        info!(
            "{}: {} names registered for {:?}",
            registration.category,
            registration.names.len(),
            registration.media_kind,
        );
    }
    info!("Featured media has {} entries.", skill.featured_media().len());

    Ok(())
}
