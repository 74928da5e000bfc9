//! # scenegen-core - Scene prompt assembly
//!
//! `scenegen-core` builds delimited text prompts for image-generation
//! pipelines out of reusable fragments: corpus lines, clothing and partner
//! variations, and descriptive character tags scraped from an image board.
//!
//! ## Highlights
//!
//! - **Windowed sampling**: contiguous context windows around a random
//!   anchor, rebalanced at corpus edges.
//! - **Positional composition**: outfit and partner fragments placed by
//!   quarter/half rules per section.
//! - **Tag resolution**: async [`TagProvider`] seam with a scraping
//!   implementation, per-attempt timeouts, retries and a fallback string.
//! - **Reproducible output**: one seeded generator threaded through every
//!   random choice.
//! - **Configuration-First**: resource locations, sampling mode and tag
//!   settings come from `scenegen.toml`, with constants centralized in
//!   `config::constants`.
//!
//! ## Architecture Overview
//!
//! - `config/`: configuration loader, defaults and constants.
//! - `scene/`: corpus loading, sampling, composition and assembly.
//! - `tags/`: tag provider trait, scraper, frequency reduction and resolver.
//! - `prompts/`: text normalization, output formatting and character prompts.
//! - `cli/` and `commands/`: argument parsing and subcommand handlers.
//!
//! ## Quickstart
//!
//! ```rust,ignore
//! use scenegen_core::{CharacterOverrides, ConfigManager, SceneAssembler, SceneRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), anyhow::Error> {
//!     let config = ConfigManager::load()?.into_config();
//!     let assembler = SceneAssembler::from_config(&config)?;
//!
//!     let request = SceneRequest::new(5, 10, 3, "1boy/2boys");
//!     let output = assembler
//!         .generate(&request, 42, &CharacterOverrides::default())
//!         .await;
//!
//!     println!("{}", output.scene_prompt);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod prompts;
pub mod scene;
pub mod tags;

// Re-exports for convenience
pub use cli::args::{Cli, Commands};
pub use config::{ConfigManager, SamplingMode, ScenegenConfig, TagsConfig};
pub use prompts::{
    CharacterOverrides, CharacterPromptGenerator, CharacterPrompts, CharacterRequest,
    ProjectType, SceneOutput, format_scene_output, normalize,
};
pub use scene::{
    ClothingConfig, Corpus, CorpusRole, ResourceError, SceneAssembler, ScenePrompt,
    SceneRequest, SceneResources,
};
pub use tags::{
    DanbooruTagProvider, ResolvedCharacter, StaticTagProvider, TagError, TagProvider,
    TagResolver,
};
