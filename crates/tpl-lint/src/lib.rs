//! # tpl-lint
//!
//! Accessibility and convention linter for component templates.
//!
//! This is the main facade crate that re-exports core functionality and the
//! built-in rules.
//!
//! ## Quick Start — `cargo test` Integration
//!
//! ```toml
//! [dev-dependencies]
//! tpl-lint = "0.3"
//! ```
//!
//! ```rust,ignore
//! // tests/templates.rs
//! #[test]
//! fn templates_are_accessible() {
//!     tpl_lint::run_check(None, None, None);
//! }
//! ```
//!
//! This runs tpl-lint as part of `cargo test`. Configure via `tpl-lint.toml`.
//!
//! ## Suppressing Violations
//!
//! Add an allow comment with a reason on the offending line or the line
//! above:
//!
//! ```html
//! <!-- tpl-lint: allow(no-autofocus) reason="login form, focus is the whole point" -->
//! <input autofocus />
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use tpl_lint::Analyzer;
//! use tpl_lint::rules::{recommended_rules, NoAutofocus};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .template_rule(NoAutofocus::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use tpl_lint_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use tpl_lint_rules::*;
}

mod runner;

pub use runner::run_check;
