//! The `marksheet init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    let path = Path::new("marksheet.toml");
    if path.exists() {
        println!("marksheet.toml already exists, skipping.");
        return Ok(());
    }

    std::fs::write(path, SAMPLE_CONFIG).context("failed to write marksheet.toml")?;
    println!("Created marksheet.toml");
    println!("\nNext steps:");
    println!("  1. Edit marksheet.toml to set the title and mark range");
    println!("  2. Run: marksheet");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# marksheet configuration

# Title shown above the main menu.
title = "Student Mark Management System"

# Accepted mark range (inclusive).
mark_min = 0.0
mark_max = 20.0
"#;
