//! Logging and debugging facilities for select-dropdown.
//!
//! This module provides:
//! - Target and span name constants for the `tracing` crate
//! - [`PerfSpan`], a guard for timing model builds and reconciliation
//! - Tree prefix helpers used to render option models for debugging
//!
//! # Tracing Integration
//!
//! select-dropdown uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("select_dropdown=debug")
//!     .init();
//! ```

/// Span names used throughout select-dropdown for tracing.
pub mod span_names {
    /// Option model construction.
    pub const BUILD: &str = "select_dropdown::build";
    /// Configuration reconciliation.
    pub const RECONCILE: &str = "select_dropdown::reconcile";
    /// User pick handling.
    pub const PICK: &str = "select_dropdown::pick";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "select_dropdown_core::signal";
    /// Option model builder target.
    pub const OPTIONS: &str = "select_dropdown::options";
    /// Selection controller target.
    pub const CONTROLLER: &str = "select_dropdown::controller";
    /// Change notifier target.
    pub const NOTIFY: &str = "select_dropdown::notify";
    /// Widget facade target.
    pub const WIDGET: &str = "select_dropdown::widget";
    /// Configuration loading target.
    pub const CONFIG: &str = "select_dropdown::config";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact dash-prefixed representation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show option keys next to their text.
    pub show_values: bool,
    /// Whether to mark disabled options.
    pub show_disabled: bool,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_values: true,
            show_disabled: true,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Options for minimal output: text only.
    pub fn minimal() -> Self {
        Self {
            show_values: false,
            show_disabled: false,
            ..Default::default()
        }
    }

    /// Options with a specific style.
    pub fn with_style(style: TreeStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    /// Build the prefix string for a tree node.
    ///
    /// `parents_last` holds one entry per ancestor below the top level,
    /// outermost first, saying whether that ancestor was the last among its
    /// siblings. A last ancestor has no continuation line under it.
    pub fn prefix(&self, parents_last: &[bool], is_last: bool) -> String {
        let (branch, corner, last) = match self.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        for &parent_last in parents_last {
            if parent_last {
                prefix.push_str(&" ".repeat(branch.chars().count()));
            } else {
                prefix.push_str(branch);
            }
            prefix.push_str(&" ".repeat(self.indent_size));
        }
        prefix.push_str(if is_last { last } else { corner });
        prefix.push(' ');
        prefix
    }
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "select_dropdown::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_ascii() {
        let options = TreeFormatOptions::with_style(TreeStyle::Ascii);
        assert_eq!(options.prefix(&[], false), "+-- ");
        assert_eq!(options.prefix(&[], true), "`-- ");
        assert_eq!(options.prefix(&[false], true), "|  `-- ");
    }

    #[test]
    fn test_prefix_under_last_parent_has_no_branch() {
        let options = TreeFormatOptions::with_style(TreeStyle::Ascii);
        assert_eq!(options.prefix(&[true], false), "   +-- ");
        assert_eq!(options.prefix(&[false, true], true), "|     `-- ");
    }

    #[test]
    fn test_prefix_unicode() {
        let options = TreeFormatOptions::default();
        assert_eq!(options.prefix(&[], true), "\u{2514}\u{2500}\u{2500} ");
        assert_eq!(options.prefix(&[true], true), "   \u{2514}\u{2500}\u{2500} ");
    }

    #[test]
    fn test_perf_span() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let _span = PerfSpan::new("test_operation");
    }
}
