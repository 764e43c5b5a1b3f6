//! Check command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use tpl_lint_core::{Analyzer, Config, Severity};
use tpl_lint_rules::{all_rules, minimal_rules, recommended_rules, strict_rules, RuleSet};

use crate::config_resolver;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let loaded = config_resolver::load(path, explicit_config)?;
    tracing::debug!("Configuration: {}", loaded.origin);
    let config = loaded.config;

    let fail_on = fail_on_severity(&config);
    let rules = select_rules(&config, rules_filter.as_deref());

    let mut builder = Analyzer::builder()
        .root(path)
        .config(config);

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    let rule_count = rules.len();
    for rule in rules.template_rules {
        builder = builder.template_rule_box(rule);
    }
    for rule in rules.directive_rules {
        builder = builder.directive_rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, rule_count);

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format)?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Picks the rule set: preset from config, narrowed by `--rules` when given.
fn select_rules(config: &Config, filter: Option<&str>) -> RuleSet {
    if let Some(filter) = filter {
        let requested: Vec<&str> = filter.split(',').map(str::trim).collect();
        return filter_rules(&requested);
    }

    match config.preset.as_deref() {
        None | Some("recommended") => recommended_rules(),
        Some("strict") => strict_rules(),
        Some("minimal") => minimal_rules(),
        Some("all") => all_rules(),
        Some(other) => {
            tracing::warn!("Unknown preset '{}', using recommended", other);
            recommended_rules()
        }
    }
}

/// Keeps only the rules whose name or code was requested.
fn filter_rules(requested: &[&str]) -> RuleSet {
    let mut set = all_rules();
    let matched = |name: &str, code: &str| {
        requested.iter().any(|r| r.eq_ignore_ascii_case(name) || r.eq_ignore_ascii_case(code))
    };

    set.template_rules.retain(|r| matched(r.name(), r.code()));
    set.directive_rules.retain(|r| matched(r.name(), r.code()));

    for name in requested {
        let known = set.template_rules.iter().any(|r| {
            r.name().eq_ignore_ascii_case(name) || r.code().eq_ignore_ascii_case(name)
        }) || set.directive_rules.iter().any(|r| {
            r.name().eq_ignore_ascii_case(name) || r.code().eq_ignore_ascii_case(name)
        });
        if !known {
            tracing::warn!("Unknown rule: {}", name);
        }
    }

    set
}

/// Parses the `fail_on` threshold; violations at or above it fail the check.
fn fail_on_severity(config: &Config) -> Severity {
    match config.fail_on.as_deref() {
        None | Some("error") => Severity::Error,
        Some("warning") => Severity::Warning,
        Some("info") => Severity::Info,
        Some(other) => {
            tracing::warn!("Unknown fail_on severity '{}', using error", other);
            Severity::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_matches_by_name() {
        let set = filter_rules(&["no-autofocus"]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.template_rules[0].name(), "no-autofocus");
    }

    #[test]
    fn filter_matches_by_code() {
        let set = filter_rules(&["TL013"]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.directive_rules[0].code(), "TL013");
    }

    #[test]
    fn filter_unknown_name_yields_empty_set() {
        assert!(filter_rules(&["does-not-exist"]).is_empty());
    }

    #[test]
    fn preset_selection_from_config() {
        let config = Config {
            preset: Some("minimal".to_string()),
            ..Config::default()
        };
        assert_eq!(select_rules(&config, None).len(), minimal_rules().len());
    }

    #[test]
    fn unknown_preset_falls_back_to_recommended() {
        let config = Config {
            preset: Some("everything".to_string()),
            ..Config::default()
        };
        assert_eq!(select_rules(&config, None).len(), recommended_rules().len());
    }

    #[test]
    fn fail_on_defaults_to_error() {
        assert_eq!(fail_on_severity(&Config::default()), Severity::Error);
    }

    #[test]
    fn fail_on_warning_lowers_threshold() {
        let config = Config {
            fail_on: Some("warning".to_string()),
            ..Config::default()
        };
        assert_eq!(fail_on_severity(&config), Severity::Warning);
    }
}
