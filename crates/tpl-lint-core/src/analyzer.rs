//! Core analyzer for orchestrating lint execution.

use crate::config::{Config, RuleConfig};
use crate::context::{FileContext, RuleContext};
use crate::metadata::extract_directives;
use crate::ontology::Ontology;
use crate::rule::{DirectiveRule, DirectiveRuleBox, TemplateRule, TemplateRuleBox};
use crate::template::{parse_template, parse_template_with_offset, Template};
use crate::types::{LintResult, Severity, Violation};
use crate::utils::allowance::{check_allow_with_reason, AllowCheck};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a template file.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    template_rules: Vec<TemplateRuleBox>,
    directive_rules: Vec<DirectiveRuleBox>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a template rule to the analyzer.
    #[must_use]
    pub fn template_rule<R: TemplateRule + 'static>(mut self, rule: R) -> Self {
        self.template_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed template rule to the analyzer.
    #[must_use]
    pub fn template_rule_box(mut self, rule: TemplateRuleBox) -> Self {
        self.template_rules.push(rule);
        self
    }

    /// Adds a directive rule to the analyzer.
    #[must_use]
    pub fn directive_rule<R: DirectiveRule + 'static>(mut self, rule: R) -> Self {
        self.directive_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed directive rule to the analyzer.
    #[must_use]
    pub fn directive_rule_box(mut self, rule: DirectiveRuleBox) -> Self {
        self.directive_rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Adds an include glob pattern.
    #[must_use]
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on parse errors (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved for a
    /// relative root.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        // Merge exclude patterns from config
        let mut exclude_patterns = self.exclude_patterns;
        if let Some(ref config) = self.config {
            exclude_patterns.extend(config.analyzer.exclude.clone());
        }

        // Add default excludes if none specified
        if exclude_patterns.is_empty() {
            exclude_patterns.extend([
                "**/node_modules/**".to_string(),
                "**/dist/**".to_string(),
            ]);
        }

        let mut include_patterns = self.include_patterns;
        if let Some(ref config) = self.config {
            include_patterns.extend(config.analyzer.include.clone());
        }

        Ok(Analyzer {
            root,
            template_rules: self.template_rules,
            directive_rules: self.directive_rules,
            exclude_patterns,
            include_patterns,
            config: self.config.unwrap_or_default(),
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Walks the project for `.html` template files and `.ts` component sources,
/// runs template rules over parsed templates (standalone and inline) and
/// directive rules over extracted decorator metadata, then applies comment
/// allowances, config enablement and severity overrides centrally.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    template_rules: Vec<TemplateRuleBox>,
    directive_rules: Vec<DirectiveRuleBox>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    config: Config,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.template_rules.len() + self.directive_rules.len()
    }

    /// Analyzes all files and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails, or on template parse
    /// failure when `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} files to analyze", files.len());

        for file_path in &files {
            match self.analyze_file(file_path) {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(AnalyzerError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.fail_on_parse_error {
                        return Err(AnalyzerError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        // Sort violations by file, then line
        result.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes a single file and returns violations.
    fn analyze_file(&self, path: &Path) -> Result<Vec<Violation>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let ctx = FileContext::new(path, &content, &self.root);

        let is_template = path.extension().is_some_and(|ext| ext == "html");
        if is_template {
            let template = parse_template(&content).map_err(|e| AnalyzerError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            Ok(self.check_template(&ctx, &content, &template))
        } else {
            Ok(self.check_component_source(&ctx, &content))
        }
    }

    /// Runs all enabled template rules over one parsed template.
    fn check_template(
        &self,
        file: &FileContext<'_>,
        content: &str,
        template: &Template,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();

        for rule in &self.template_rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let ctx =
                RuleContext::new(file, Ontology::global()).with_options(self.rule_config(rule.name()));
            let found = rule.check(&ctx, template);
            let found = self.apply_allowance(content, rule.name(), rule.requires_allow_reason(), found);
            let found = self.apply_severity_override(rule.name(), found);
            violations.extend(found);
        }

        violations
    }

    /// Runs directive rules, plus template rules over inline templates, for
    /// one `.ts` source file.
    fn check_component_source(&self, file: &FileContext<'_>, content: &str) -> Vec<Violation> {
        let mut violations = Vec::new();
        let directives = extract_directives(content);

        for rule in &self.directive_rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let ctx =
                RuleContext::new(file, Ontology::global()).with_options(self.rule_config(rule.name()));
            for directive in &directives {
                let found = rule.check_directive(&ctx, directive);
                let found =
                    self.apply_allowance(content, rule.name(), rule.requires_allow_reason(), found);
                let found = self.apply_severity_override(rule.name(), found);
                violations.extend(found);
            }
        }

        // Inline templates get the full template rule set, with spans offset
        // into the host file.
        for directive in &directives {
            let Some(inline) = &directive.template else {
                continue;
            };
            match parse_template_with_offset(&inline.value, inline.span.start) {
                Ok(template) => {
                    violations.extend(self.check_template(file, content, &template));
                }
                Err(e) => {
                    warn!(
                        "Failed to parse inline template in {}: {}",
                        file.path.display(),
                        e
                    );
                }
            }
        }

        violations
    }

    /// Applies comment allowance directives to a rule's violations.
    ///
    /// A reasoned allow drops the violation. A reasonless allow drops it
    /// only when the rule does not require a reason; otherwise the violation
    /// is replaced by a warning pointing at the incomplete directive.
    fn apply_allowance(
        &self,
        content: &str,
        rule_name: &str,
        requires_reason: bool,
        violations: Vec<Violation>,
    ) -> Vec<Violation> {
        violations
            .into_iter()
            .filter_map(|v| {
                match check_allow_with_reason(content, v.location.line, rule_name) {
                    AllowCheck::Denied => Some(v),
                    AllowCheck::Allowed { reason: Some(_) } => None,
                    AllowCheck::Allowed { reason: None } => {
                        if requires_reason {
                            Some(Violation::new(
                                v.code.clone(),
                                v.rule.clone(),
                                Severity::Warning,
                                v.location.clone(),
                                format!(
                                    "Allow directive for '{rule_name}' is missing a required reason"
                                ),
                            ))
                        } else {
                            None
                        }
                    }
                }
            })
            .collect()
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    /// Discovers template and component source files to analyze.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder.standard_filters(self.config.analyzer.respect_gitignore);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.into_path();
            let extension = path.extension().and_then(|e| e.to_str());
            if !matches!(extension, Some("html" | "ts")) {
                continue;
            }

            if self.should_exclude(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }
            if !self.matches_include(&path) {
                continue;
            }

            files.push(path);
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/dist/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty() && path_str.contains(&normalized_pattern) {
                return true;
            }
        }

        false
    }

    /// Checks the include patterns; an empty list matches everything.
    fn matches_include(&self, path: &Path) -> bool {
        if self.include_patterns.is_empty() {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.include_patterns.iter().any(|pattern| {
            glob::Pattern::new(pattern).is_ok_and(|p| p.matches(&path_str))
        })
    }

    /// Gets the rule configuration for a specific rule.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.config.rules.get(rule_name)
    }
}
