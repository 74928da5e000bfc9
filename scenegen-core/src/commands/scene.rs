//! Scene command - assemble one scene prompt

use crate::config::ScenegenConfig;
use crate::prompts::format::{CharacterOverrides, SceneOutput};
use crate::scene::{SceneAssembler, SceneRequest};
use anyhow::{Context, Result};
use console::style;

/// Handle the scene command
pub async fn handle_scene_command(
    config: &ScenegenConfig,
    request: &SceneRequest,
    seed: u64,
    overrides: &CharacterOverrides,
    json: bool,
) -> Result<SceneOutput> {
    let assembler =
        SceneAssembler::from_config(config).context("Failed to load scene resources")?;
    let output = assembler.generate(request, seed, overrides).await;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize scene output")?
        );
    } else {
        println!("{} {}", style("Character:").cyan().bold(), output.character);
        println!("{} {}", style("Tags:").cyan().bold(), output.character_tags);
        println!("{}", style("Scene prompt:").cyan().bold());
        println!("{}", output.scene_prompt);
    }

    Ok(output)
}
