//! A headless select/dropdown widget.
//!
//! The hard part of a dropdown is not drawing the menu but keeping a
//! consistent option model and selection value across repeated configuration
//! updates, whether the value is owned by a parent (controlled mode) or by
//! the widget itself (uncontrolled mode). This crate provides:
//!
//! - **Option model**: three input shapes normalized into ordered groups
//!   ([`options`])
//! - **Model equality**: order-sensitive comparison used to skip redundant
//!   updates ([`equality`])
//! - **Selection controller**: initial value and reconciliation on
//!   configuration changes ([`controller`])
//! - **Change notifier**: `selected`/`changed` signals on user picks
//!   ([`notify`])
//! - **Widget**: [`SelectDropdown`], which owns one instance's state
//!
//! Rendering is left to the host; it reads the [`projection`]s.
//!
//! # Example
//!
//! ```
//! use select_dropdown::{SelectConfig, SelectDropdown};
//! use select_dropdown::options::Child;
//!
//! let mut select = SelectDropdown::new(
//!     SelectConfig::new()
//!         .with_id("dropdown-timespan")
//!         .with_value("day")
//!         .with_children(vec![
//!             Child::option("day", "Day"),
//!             Child::option("month", "Month"),
//!         ]),
//! );
//!
//! // Controlled: a pick notifies but the parent must feed the value back.
//! select.pick("month");
//! assert_eq!(select.value(), Some("day"));
//! ```

pub mod config;
pub mod controller;
pub mod debug;
pub mod equality;
mod error;
pub mod notify;
pub mod options;
pub mod projection;
pub mod widget;

pub use config::SelectConfig;
pub use controller::{SelectionMode, SelectionState};
pub use error::{Error, Result};
pub use notify::{Fired, PickOutcome, PickSignals};
pub use options::{Child, GroupSpec, OptionEntry, OptionGroup, OptionModel, OptionSource, OptionsSpec, SelectOption};
pub use widget::SelectDropdown;

pub use select_dropdown_core::{IdSource, RandomIdSource, SequentialIdSource, Signal, WidgetId};
