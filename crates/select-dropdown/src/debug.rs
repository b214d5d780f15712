//! Debug visualization of option models.
//!
//! ```
//! use select_dropdown::debug::ModelTreeDebug;
//! use select_dropdown::options::{Child, OptionModel, OptionSource};
//!
//! let children = vec![
//!     Child::option("day", "Day"),
//!     Child::optgroup("Long", vec![Child::option("year", "Year")]),
//! ];
//! let model = OptionModel::build(OptionSource::Declarative(&children), false);
//! println!("{}", ModelTreeDebug::new(&model));
//! ```

use std::fmt::{self, Write as FmtWrite};

use select_dropdown_core::TreeFormatOptions;

use crate::options::{OptionGroup, OptionModel};

/// Renders an [`OptionModel`] as an indented tree.
#[derive(Debug, Clone)]
pub struct ModelTreeDebug<'a> {
    model: &'a OptionModel,
    options: TreeFormatOptions,
}

impl<'a> ModelTreeDebug<'a> {
    /// Create a visualizer with default options.
    pub fn new(model: &'a OptionModel) -> Self {
        Self::with_options(model, TreeFormatOptions::default())
    }

    /// Create a visualizer with custom options.
    pub fn with_options(model: &'a OptionModel, options: TreeFormatOptions) -> Self {
        Self { model, options }
    }

    /// Format the whole model.
    pub fn format(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_tree(&mut output);
        output
    }

    fn write_tree(&self, out: &mut impl FmtWrite) -> fmt::Result {
        writeln!(
            out,
            "Options ({} groups, {} options):",
            self.model.groups().len(),
            self.model.option_count()
        )?;
        if self.model.is_empty() {
            return writeln!(out, "  (empty)");
        }

        let count = self.model.groups().len();
        for (i, group) in self.model.groups().iter().enumerate() {
            self.write_group(out, group, i + 1 == count)?;
        }
        Ok(())
    }

    fn write_group(&self, out: &mut impl FmtWrite, group: &OptionGroup, is_last: bool) -> fmt::Result {
        writeln!(
            out,
            "{}{}",
            self.options.prefix(&[], is_last),
            group.label().unwrap_or("(root)")
        )?;

        let count = group.len();
        for (i, option) in group.options().enumerate() {
            write!(out, "{}{}", self.options.prefix(&[is_last], i + 1 == count), option.text)?;
            if self.options.show_values {
                write!(out, " [{}]", option.value)?;
            }
            if self.options.show_disabled && option.disabled {
                write!(out, " (disabled)")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl fmt::Display for ModelTreeDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f)
    }
}
