//! Check command - validate that every scene resource loads

use crate::config::ScenegenConfig;
use crate::scene::SceneResources;
use anyhow::{Context, Result};
use console::style;

/// Handle the check command
pub fn handle_check_command(config: &ScenegenConfig) -> Result<SceneResources> {
    let resources_config = &config.resources;
    println!(
        "{} {}",
        style("Resources:").cyan().bold(),
        resources_config.base_dir.display()
    );

    let resources =
        SceneResources::load(resources_config).context("Resource validation failed")?;

    for corpus in [&resources.opening, &resources.middle, &resources.closing] {
        println!(
            "  {} {} corpus: {} lines",
            style("✓").green(),
            corpus.role(),
            corpus.len()
        );
    }
    let clothing = &resources.clothing;
    println!(
        "  {} clothing: {} colors, {} items, {}/{} middle items",
        style("✓").green(),
        clothing.opening.colors.len(),
        clothing.opening.clothing.len(),
        clothing.middle.part1.len(),
        clothing.middle.part2.len()
    );
    println!(
        "  {} characters: {}",
        style("✓").green(),
        resources.characters.len()
    );

    if resources.characters.is_empty() {
        println!(
            "{} character list is empty; scenes will carry no character",
            style("[WARN]").yellow().bold()
        );
    }

    Ok(resources)
}
