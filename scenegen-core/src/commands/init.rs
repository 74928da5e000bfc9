//! Init command - write a default configuration file

use crate::config::ScenegenConfig;
use anyhow::Result;
use console::style;
use std::path::Path;

/// Handle the init command
pub fn handle_init_command(workspace: &Path, force: bool) -> Result<()> {
    println!(
        "{} {}",
        style("Initializing scenegen in").cyan().bold(),
        workspace.display()
    );

    let created = ScenegenConfig::bootstrap_project(workspace, force)?;
    if created.is_empty() {
        println!(
            "{} configuration already exists (use --force to overwrite)",
            style("[SKIP]").yellow()
        );
    }
    for file in created {
        println!("  {} {}", style("✓").green(), file);
    }

    Ok(())
}
