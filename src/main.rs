//! scenegen - scene prompt assembly CLI

use anyhow::{Context, Result};
use clap::Parser;
use scenegen_core::cli::{Cli, Commands};
use scenegen_core::commands::{
    handle_character_command, handle_check_command, handle_init_command, handle_scene_command,
    handle_tags_command,
};
use scenegen_core::config::{ConfigManager, ScenegenConfig};
use scenegen_core::prompts::{CharacterOverrides, CharacterRequest};
use scenegen_core::scene::SceneRequest;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let workspace = args.get_workspace();

    if let Commands::Init { force } = &args.command {
        return handle_init_command(&workspace, *force);
    }

    let config = load_config(&args)?;

    match args.command {
        Commands::Scene {
            opening,
            middle,
            closing,
            partner,
            seed,
            character_name,
            character_tags,
            json,
        } => {
            let request = SceneRequest::new(opening, middle, closing, partner);
            let overrides = CharacterOverrides {
                name: character_name,
                tags: character_tags,
            };
            handle_scene_command(&config, &request, seed, &overrides, json).await?;
        }
        Commands::Character {
            organization,
            project_type,
            target,
            name,
            base,
            details,
            background,
            quality,
            scenes,
            max_prompts,
            json,
        } => {
            let request = CharacterRequest {
                organization,
                project_type,
                workspace: target,
                character_name: name,
                character_base: base,
                scene_details: details,
                background,
                quality_tags: quality,
                prompt_scenes: scenes,
                max_prompts: max_prompts.map(|limit| limit as usize),
            };
            handle_character_command(&config, &request, json)?;
        }
        Commands::Tags { character, pages } => {
            handle_tags_command(&config.tags, &character, pages).await?;
        }
        Commands::Check => {
            handle_check_command(&config)?;
        }
        Commands::Init { .. } => {}
    }

    Ok(())
}

fn load_config(args: &Cli) -> Result<ScenegenConfig> {
    let manager = match &args.config {
        Some(path) => ConfigManager::load_from_file(path),
        None => ConfigManager::load_from_workspace(args.get_workspace()),
    }
    .context("Failed to load scenegen configuration")?;

    match manager.config_path() {
        Some(path) => tracing::debug!(path = %path.display(), "using configuration file"),
        None => tracing::debug!("no configuration file found, using defaults"),
    }

    Ok(manager.into_config())
}
