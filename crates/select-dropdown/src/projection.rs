//! Read-only projections of a selection state.
//!
//! The rendering layer never mutates the model or value; it reads them
//! through these projections:
//!
//! - [`hidden_input`]: the hidden form field mirroring the current value
//! - [`display`]: the text shown in the toggle, or the placeholder
//! - [`menu`]: the flattened list of headers and items for the dropdown

use crate::controller::SelectionState;
use crate::options::OptionModel;

/// A hidden form input carrying the current value under a field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenInput {
    /// The form field name.
    pub name: String,
    /// The current value, or `""` when nothing is selected.
    pub value: String,
}

/// Project the hidden form input. Returns `None` when no name is configured.
pub fn hidden_input(name: Option<&str>, state: &SelectionState) -> Option<HiddenInput> {
    name.map(|name| HiddenInput {
        name: name.to_string(),
        value: state.value().unwrap_or_default().to_string(),
    })
}

/// The toggle label of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    /// Text to show.
    pub text: String,
    /// True when no option is shown, or the shown option has an empty key.
    pub empty: bool,
}

/// Project the toggle label.
///
/// A value that is not in the model (including a trusted default that has
/// not loaded yet) shows the placeholder.
pub fn display(state: &SelectionState, placeholder: Option<&str>) -> Display {
    match state.value().and_then(|value| state.model().find(value)) {
        Some(option) => Display {
            text: option.text.clone(),
            empty: option.value.is_empty(),
        },
        None => Display {
            text: placeholder.unwrap_or_default().to_string(),
            empty: true,
        },
    }
}

/// One row of the dropdown menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// A group header.
    Header(String),
    /// A pickable (or disabled) option.
    Item {
        value: String,
        text: String,
        disabled: bool,
        /// The option's key is the empty string.
        empty_value: bool,
    },
}

/// Flatten the model into menu rows: each labelled group contributes a
/// header followed by its options.
pub fn menu(model: &OptionModel) -> Vec<MenuEntry> {
    let mut entries = Vec::with_capacity(model.option_count() + model.groups().len());
    for group in model.groups() {
        if let Some(label) = group.label().filter(|label| !label.is_empty()) {
            entries.push(MenuEntry::Header(label.to_string()));
        }
        entries.extend(group.options().map(|option| MenuEntry::Item {
            value: option.value.clone(),
            text: option.text.clone(),
            disabled: option.disabled,
            empty_value: option.value.is_empty(),
        }));
    }
    entries
}
