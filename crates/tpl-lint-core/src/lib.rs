//! # tpl-lint-core
//!
//! Core framework for linting component templates and directive metadata.
//!
//! This crate provides the foundational traits and types for building
//! template linters. It includes:
//!
//! - [`TemplateRule`] trait for rules over parsed templates
//! - [`DirectiveRule`] trait for rules over decorator metadata
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//! - the accessibility [`ontology`] and the predicates built on it
//!
//! ## Example
//!
//! ```ignore
//! use tpl_lint_core::{Analyzer, TemplateRule, Severity};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .template_rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

/// Accessibility predicates over template elements.
pub mod a11y;
/// Attribute resolution across binding syntaxes.
pub mod attributes;
/// Decorator metadata extraction from component sources.
pub mod metadata;
/// ARIA role, property and AX object tables.
pub mod ontology;
/// Selector grammar parsing and validation.
pub mod selector;
/// Template AST and parser.
pub mod template;
/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use attributes::AttributeRef;
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::{FileContext, RuleContext};
pub use metadata::{extract_directives, DirectiveKind, DirectiveMetadata};
pub use ontology::Ontology;
pub use rule::{DirectiveRule, DirectiveRuleBox, TemplateRule, TemplateRuleBox};
pub use template::{parse_template, parse_template_with_offset, Element, Node, NodeId, Template};
pub use types::{Label, LintResult, Location, Replacement, Severity, Suggestion, Violation};
pub use utils::allowance::{check_allow_with_reason, AllowCheck};
