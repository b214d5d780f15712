//! The dropdown widget.
//!
//! [`SelectDropdown`] ties the pieces together for one widget instance. It
//! owns the current [`SelectionState`] exclusively and only changes it
//! through [`SelectDropdown::set_config`] (a configuration pass from the
//! parent) and [`SelectDropdown::pick`] (a user pick from the menu). Both
//! take `&mut self`, so updates to one instance are strictly sequential.
//!
//! # Example
//!
//! ```
//! use select_dropdown::{SelectConfig, SelectDropdown};
//!
//! let mut select = SelectDropdown::new(
//!     SelectConfig::new()
//!         .with_name("timespan")
//!         .with_default_value("day")
//!         .with_options([("day", "Day"), ("month", "Month"), ("year", "Year")]),
//! );
//!
//! select.signals.changed.connect(|value| {
//!     println!("Timespan changed to: {}", value);
//! });
//!
//! select.pick("month");
//! assert_eq!(select.value(), Some("month"));
//! assert_eq!(select.hidden_input().unwrap().value, "month");
//! ```

use std::sync::Arc;

use select_dropdown_core::logging::targets;
use select_dropdown_core::{IdSource, RandomIdSource, Signal, WidgetId};

use crate::config::SelectConfig;
use crate::controller::{self, SelectionMode, SelectionState};
use crate::error::Result;
use crate::notify::{self, PickOutcome, PickSignals};
use crate::options::OptionModel;
use crate::projection::{self, Display, HiddenInput, MenuEntry};

/// A headless select/dropdown widget.
///
/// # Signals
///
/// - `signals.selected(String)`: Emitted on every user pick
/// - `signals.changed(String)`: Emitted when a user pick differs from the value
/// - `state_changed(())`: Emitted whenever the stored state is replaced
pub struct SelectDropdown {
    /// The most recent configuration.
    config: SelectConfig,

    /// The resolved state.
    state: SelectionState,

    /// Pick notifications.
    pub signals: PickSignals,

    /// Signal emitted when the model or value changes.
    pub state_changed: Signal<()>,
}

impl SelectDropdown {
    /// Create a dropdown, generating a random id if the config has none.
    pub fn new(config: SelectConfig) -> Self {
        Self::with_id_source(config, &mut RandomIdSource::new())
    }

    /// Create a dropdown, drawing a missing id from `ids`.
    pub fn with_id_source(config: SelectConfig, ids: &mut dyn IdSource) -> Self {
        let state = controller::init(&config, ids);
        Self {
            config,
            state,
            signals: PickSignals::new(),
            state_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Apply a new configuration pass.
    ///
    /// Returns `true` when the model or value changed, in which case
    /// `state_changed` has been emitted.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::IdChanged`] if the configuration names a
    /// different id or drops the id it was created with. The widget is left untouched in that case.
    pub fn set_config(&mut self, config: SelectConfig) -> Result<bool> {
        let next = controller::reconcile(&self.state, &config)?;
        self.config = config;

        match next {
            Some(state) => {
                self.state = state;
                self.state_changed.emit(());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The most recent configuration.
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    // =========================================================================
    // User interaction
    // =========================================================================

    /// Handle a user pick of `value` from the menu.
    ///
    /// Picks of disabled or unknown keys cannot come from the menu; they are
    /// logged and ignored, returning `None`.
    pub fn pick(&mut self, value: &str) -> Option<PickOutcome> {
        match self.state.model().find(value) {
            Some(option) if option.disabled => {
                tracing::warn!(target: targets::WIDGET, id = %self.id(), value, "ignoring pick of disabled option");
                return None;
            }
            None => {
                tracing::warn!(target: targets::WIDGET, id = %self.id(), value, "ignoring pick of unknown option");
                return None;
            }
            Some(_) => {}
        }

        let outcome = notify::on_user_pick(value, &self.state, self.mode(), &self.signals);
        if outcome.next_value.as_deref() != self.state.value() {
            self.state = self.state.with_value(outcome.next_value.clone());
            self.state_changed.emit(());
        }
        Some(outcome)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The currently resolved value.
    pub fn value(&self) -> Option<&str> {
        self.state.value()
    }

    /// The instance id.
    pub fn id(&self) -> &WidgetId {
        self.state.id()
    }

    /// The canonical option model.
    pub fn model(&self) -> &Arc<OptionModel> {
        self.state.model()
    }

    /// The resolved state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Controlled or uncontrolled, per the current configuration.
    pub fn mode(&self) -> SelectionMode {
        SelectionMode::of(&self.config)
    }

    /// The placeholder text.
    pub fn placeholder(&self) -> Option<&str> {
        self.config.placeholder.as_deref()
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// The hidden form input mirroring the value, if a name is configured.
    pub fn hidden_input(&self) -> Option<HiddenInput> {
        projection::hidden_input(self.config.name.as_deref(), &self.state)
    }

    /// The toggle label.
    pub fn display(&self) -> Display {
        projection::display(&self.state, self.placeholder())
    }

    /// The menu rows.
    pub fn menu(&self) -> Vec<MenuEntry> {
        projection::menu(self.state.model())
    }
}

impl std::fmt::Debug for SelectDropdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectDropdown")
            .field("id", self.id())
            .field("value", &self.value())
            .field("mode", &self.mode())
            .field("options", &self.model().option_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(SelectDropdown: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use select_dropdown_core::SequentialIdSource;

    use super::*;
    use crate::options::{Child, GroupSpec, OptionEntry};

    fn dropdown(config: SelectConfig) -> SelectDropdown {
        SelectDropdown::with_id_source(config, &mut SequentialIdSource::new("w"))
    }

    fn counter(signal: &Signal<()>) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_creation() {
        let select = dropdown(SelectConfig::new());
        assert_eq!(select.id().as_str(), "w-1");
        assert_eq!(select.value(), None);
        assert_eq!(select.mode(), SelectionMode::Uncontrolled);
        assert!(select.menu().is_empty());
    }

    #[test]
    fn test_random_id_when_not_supplied() {
        let select = SelectDropdown::new(SelectConfig::new());
        assert!(select.id().as_str().starts_with("select-dropdown-"));
    }

    #[test]
    fn test_uncontrolled_pick_updates_value() {
        let mut select = dropdown(
            SelectConfig::new()
                .with_default_value("a")
                .with_options([("a", "A"), ("b", "B")]),
        );
        let changes = counter(&select.state_changed);

        let outcome = select.pick("b").unwrap();
        assert!(outcome.changed());
        assert_eq!(select.value(), Some("b"));
        assert_eq!(changes.load(Ordering::SeqCst), 1);

        select.pick("b").unwrap();
        assert_eq!(changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_controlled_pick_keeps_value_until_fed_back() {
        let config = SelectConfig::new().with_value("a").with_options([("a", "A"), ("b", "B")]);
        let mut select = dropdown(config.clone());

        select.pick("b").unwrap();
        assert_eq!(select.value(), Some("a"));

        assert!(select.set_config(config.with_value("b")).unwrap());
        assert_eq!(select.value(), Some("b"));
    }

    #[test]
    fn test_pick_disabled_or_unknown_is_ignored() {
        let specs = vec![GroupSpec::new(None)
            .with_option("a", "A")
            .with_option("x", OptionEntry::disabled("X"))];
        let mut select = dropdown(SelectConfig::new().with_options(specs));
        let selected = counter_string(&select.signals.selected);

        assert!(select.pick("x").is_none());
        assert!(select.pick("missing").is_none());
        assert_eq!(select.value(), None);
        assert_eq!(selected.load(Ordering::SeqCst), 0);
    }

    fn counter_string(signal: &Signal<String>) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_set_config_unchanged_does_not_emit() {
        let config = SelectConfig::new().with_options([("a", "A")]);
        let mut select = dropdown(config.clone());
        let changes = counter(&select.state_changed);
        let model = select.model().clone();

        assert!(!select.set_config(config.with_placeholder("Pick")).unwrap());
        assert_eq!(changes.load(Ordering::SeqCst), 0);
        assert!(Arc::ptr_eq(&model, select.model()));
        assert_eq!(select.placeholder(), Some("Pick"));
    }

    #[test]
    fn test_set_config_id_change_leaves_widget_untouched() {
        let mut select = dropdown(SelectConfig::new().with_id("fixed").with_name("f"));
        assert!(select.set_config(SelectConfig::new().with_id("other")).is_err());
        assert_eq!(select.id().as_str(), "fixed");
        assert_eq!(select.config().name.as_deref(), Some("f"));

        assert!(select.set_config(SelectConfig::new().with_name("g")).is_err());
        assert_eq!(select.config().name.as_deref(), Some("f"));
    }

    #[test]
    fn test_projections_follow_state() {
        let mut select = dropdown(
            SelectConfig::new()
                .with_name("period")
                .with_placeholder("Choose...")
                .with_children(vec![
                    Child::option("day", "Day"),
                    Child::optgroup("Long", vec![Child::option("year", "Year")]),
                ]),
        );

        assert_eq!(select.display().text, "Choose...");
        assert_eq!(select.hidden_input().unwrap().value, "");
        assert_eq!(select.menu().len(), 3);

        select.pick("year").unwrap();
        assert_eq!(select.display().text, "Year");
        assert_eq!(select.hidden_input().unwrap().value, "year");
    }
}
