//! Character command - character, scene and hires-fix prompts

use crate::config::ScenegenConfig;
use crate::prompts::character::{CharacterPromptGenerator, CharacterPrompts, CharacterRequest};
use anyhow::{Context, Result};
use console::style;

/// Handle the character command
pub fn handle_character_command(
    config: &ScenegenConfig,
    request: &CharacterRequest,
    json: bool,
) -> Result<CharacterPrompts> {
    let prompts = CharacterPromptGenerator::new(&config.character)
        .generate(request)
        .context("Failed to generate character prompts")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&prompts)
                .context("Failed to serialize character prompts")?
        );
        return Ok(prompts);
    }

    println!("{}", style("Character prompt").cyan().bold());
    println!("{}\n", prompts.character_prompt);

    println!(
        "{} ({})",
        style("Scene prompts").cyan().bold(),
        prompts.scene_prompts.len()
    );
    println!("{}\n", prompts.scene_block());

    println!("{}", style("Hires-fix prompts").cyan().bold());
    for prompt in &prompts.hiresfix_prompts {
        println!("{prompt}");
    }

    println!("\n{} {}", style("Save path:").dim(), prompts.save_path);

    Ok(prompts)
}
