//! CLI argument parsing

use crate::config::constants::{defaults, scene};
use crate::prompts::character::ProjectType;
use clap::{ColorChoice, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Main CLI structure for scenegen
#[derive(Parser, Debug)]
#[command(
    name = "scenegen",
    version,
    about = "Scene prompt assembly for image-generation pipelines\n\nFeatures:\n• Context-window sampling over opening, middle and closing corpora\n• Outfit and partner enrichment with positional placement rules\n• Character tag resolution from a remote image board\n• Character prompt batches with deterministic save paths",
    color = ColorChoice::Auto
)]
pub struct Cli {
    /// Explicit configuration file (skips the workspace lookup)
    #[arg(long, global = true, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Workspace root used for configuration lookup; defaults to the current directory
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        value_hint = ValueHint::DirPath
    )]
    pub workspace: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = defaults::DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble one scene prompt and pair it with a character
    ///
    /// Prints the cleaned character name, its escaped tags and the
    /// `/`-delimited scene prompt.
    ///
    /// Example: scenegen scene --opening 5 --middle 10 --closing 3 --partner "1boy/2boys" --seed 7
    Scene {
        /// Opening lines to sample
        #[arg(long, default_value_t = scene::DEFAULT_OPENING_COUNT, value_parser = clap::value_parser!(i64).range(0..=scene::MAX_SECTION_COUNT))]
        opening: i64,

        /// Middle lines to sample
        #[arg(long, default_value_t = scene::DEFAULT_MIDDLE_COUNT, value_parser = clap::value_parser!(i64).range(0..=scene::MAX_SECTION_COUNT))]
        middle: i64,

        /// Closing lines to sample
        #[arg(long, default_value_t = scene::DEFAULT_CLOSING_COUNT, value_parser = clap::value_parser!(i64).range(0..=scene::MAX_SECTION_COUNT))]
        closing: i64,

        /// Partner alternatives separated by `/`
        #[arg(long, default_value = "")]
        partner: String,

        /// Seed for every random choice
        #[arg(long, default_value_t = defaults::DEFAULT_SEED)]
        seed: u64,

        /// Use this character instead of a random one
        #[arg(long)]
        character_name: Option<String>,

        /// Use these tags instead of looking them up
        #[arg(long)]
        character_tags: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate character, scene and hires-fix prompts plus a save path
    Character {
        /// Organization key from the [character] table
        #[arg(long)]
        organization: String,

        #[arg(long, value_enum, default_value_t = ProjectType::Comic)]
        project_type: ProjectType,

        /// Workspace key from the [character] table
        #[arg(long)]
        target: String,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        base: String,

        #[arg(long, default_value = "")]
        details: String,

        #[arg(long, default_value = "")]
        background: String,

        #[arg(long, default_value = "")]
        quality: String,

        /// Scene segments separated by `/`
        #[arg(long)]
        scenes: String,

        /// Keep only the first N scene segments
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..=scene::MAX_CHARACTER_PROMPTS as u64))]
        max_prompts: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve tags for one character through the tag provider
    Tags {
        character: String,

        /// Listing pages to scrape (overrides configuration)
        #[arg(long)]
        pages: Option<u32>,
    },

    /// Load every resource and report what was found
    Check,

    /// Write a default scenegen.toml into the workspace
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Workspace root, falling back to the current directory
    pub fn get_workspace(&self) -> PathBuf {
        self.workspace
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
