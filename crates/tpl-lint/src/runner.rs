//! Test-harness runner for `cargo test` integration.

use std::path::{Path, PathBuf};
use tpl_lint_core::{Analyzer, Config, Severity};
use tpl_lint_rules::Preset;

/// Config file names to search for, in priority order.
const CONFIG_CANDIDATES: &[&str] = &["tpl-lint.toml", ".tpl-lint.toml"];

/// Runs tpl-lint analysis as part of `cargo test`.
///
/// All arguments override the corresponding config file settings when given.
/// Panics with a formatted report if violations are found, which is how a
/// wrapping `#[test]` fails.
///
/// # Panics
///
/// Panics if violations at or above `fail_on` severity are found,
/// or if the analyzer cannot be built.
pub fn run_check(preset: Option<&str>, config_path: Option<&str>, fail_on: Option<&str>) {
    let root = find_project_root();
    let content = read_config_content(&root, config_path);
    let config = parse_config(&content);

    let effective_preset = resolve_preset(preset, &config);
    let effective_fail_on = resolve_fail_on(fail_on, &config);
    let rules = effective_preset.rules();

    let mut builder = Analyzer::builder().root(&root).config(config);
    for rule in rules.template_rules {
        builder = builder.template_rule_box(rule);
    }
    for rule in rules.directive_rules {
        builder = builder.directive_rule_box(rule);
    }

    let analyzer = builder.build().unwrap_or_else(|e| {
        panic!("tpl-lint: failed to build analyzer: {e}");
    });

    let result = analyzer.analyze().unwrap_or_else(|e| {
        panic!("tpl-lint: analysis failed: {e}");
    });

    if result.has_violations_at(effective_fail_on) {
        let report = result.format_test_report(effective_fail_on);
        panic!("{report}");
    }
}

/// Reads the raw TOML content from the config file.
///
/// Returns an empty string if no config file is found.
fn read_config_content(root: &Path, explicit_path: Option<&str>) -> String {
    if let Some(path) = explicit_path {
        let full_path = if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            root.join(path)
        };
        return std::fs::read_to_string(&full_path).unwrap_or_else(|e| {
            panic!(
                "tpl-lint: failed to read config from {}: {e}",
                full_path.display()
            );
        });
    }

    for candidate in CONFIG_CANDIDATES {
        let path = root.join(candidate);
        if path.exists() {
            return std::fs::read_to_string(&path).unwrap_or_else(|e| {
                panic!(
                    "tpl-lint: failed to read config from {}: {e}",
                    path.display()
                );
            });
        }
    }

    String::new()
}

/// Parses a `Config` from TOML content.
fn parse_config(content: &str) -> Config {
    if content.is_empty() {
        return Config::default();
    }
    Config::parse(content).unwrap_or_else(|e| {
        panic!("tpl-lint: failed to parse config: {e}");
    })
}

/// Checks whether a `Cargo.toml` file defines a `[workspace]` section
/// by parsing as TOML, avoiding false positives from comments or strings.
fn has_workspace_section(cargo_toml: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(cargo_toml) else {
        return false;
    };
    let Ok(table) = content.parse::<toml::Table>() else {
        return false;
    };
    table.contains_key("workspace")
}

/// Finds the project root by looking for `Cargo.toml` from `CARGO_MANIFEST_DIR`.
fn find_project_root() -> PathBuf {
    // CARGO_MANIFEST_DIR points to the crate containing the test,
    // which may be a workspace member. Walk up to find workspace root.
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let manifest_path = PathBuf::from(&manifest_dir);

        // Check if there's a workspace Cargo.toml above
        let mut candidate = manifest_path.as_path();
        loop {
            let cargo_toml = candidate.join("Cargo.toml");
            if cargo_toml.exists() && has_workspace_section(&cargo_toml) {
                return candidate.to_path_buf();
            }
            match candidate.parent() {
                Some(parent) => candidate = parent,
                None => break,
            }
        }

        // No workspace root found — use manifest dir itself
        return manifest_path;
    }

    // Fallback: current directory
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolves the effective preset from explicit arg > config > default.
fn resolve_preset(arg: Option<&str>, config: &Config) -> Preset {
    let name = arg.or(config.preset.as_deref()).unwrap_or("recommended");

    match name {
        "recommended" => Preset::Recommended,
        "strict" => Preset::Strict,
        "minimal" => Preset::Minimal,
        other => panic!(
            "tpl-lint: unknown preset `{other}`. Valid presets: recommended, strict, minimal"
        ),
    }
}

/// Resolves the effective `fail_on` severity from explicit arg > config > default.
fn resolve_fail_on(arg: Option<&str>, config: &Config) -> Severity {
    let name = arg.or(config.fail_on.as_deref()).unwrap_or("error");

    match name {
        "error" => Severity::Error,
        "warning" => Severity::Warning,
        "info" => Severity::Info,
        other => {
            panic!("tpl-lint: unknown severity `{other}`. Valid values: error, warning, info")
        }
    }
}
