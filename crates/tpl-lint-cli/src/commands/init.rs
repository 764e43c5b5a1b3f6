//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# tpl-lint configuration
# See https://github.com/example/tpl-lint for documentation

# Preset to start from: "recommended", "strict" or "minimal"
preset = "recommended"

# Severity that makes the check fail: "error", "warning" or "info"
# fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
]

# Respect .gitignore files
respect_gitignore = true

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.no-distracting-elements]
enabled = true
# severity = "warning"  # Override default severity
# elements = ["marquee", "blink"]

[rules.no-duplicate-attributes]
enabled = true
# allow_two_way_data_binding = true
# ignore = []

# [rules.component-selector]
# type = "element"
# prefix = "app"
# style = "kebab-case"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("tpl-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created tpl-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit tpl-lint.toml to configure rules");
    println!("  2. Run: tpl-lint check");

    Ok(())
}
