//! Change notification for user picks.
//!
//! On every pick the `selected` signal fires with the picked value. The
//! `changed` signal fires only when the picked key differs from the current
//! value. In uncontrolled mode a change also becomes the next stored value;
//! in controlled mode the stored value stays put and the owner is expected
//! to feed the new value back on its next configuration pass.

use select_dropdown_core::logging::{span_names, targets};
use select_dropdown_core::{PerfSpan, Signal};

use crate::controller::{SelectionMode, SelectionState};

/// The notification channels of a dropdown.
#[derive(Debug, Default)]
pub struct PickSignals {
    /// Emitted on every pick, with the picked value.
    pub selected: Signal<String>,
    /// Emitted when a pick changes the value, with the new value.
    pub changed: Signal<String>,
}

impl PickSignals {
    /// Create signals with no connections.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Which notifications a pick fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fired {
    /// `selected` fired.
    pub select: bool,
    /// `changed` fired.
    pub change: bool,
}

/// The result of processing a user pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickOutcome {
    /// The value the widget should store after the pick.
    pub next_value: Option<String>,
    /// Which notifications fired.
    pub fired: Fired,
}

impl PickOutcome {
    /// Whether the pick changed the value.
    pub fn changed(&self) -> bool {
        self.fired.change
    }
}

/// Process a user pick against the current state.
///
/// `picked` is expected to be the key of an enabled option; the core does not
/// re-check that.
pub fn on_user_pick(
    picked: &str,
    state: &SelectionState,
    mode: SelectionMode,
    signals: &PickSignals,
) -> PickOutcome {
    let _perf = PerfSpan::new(span_names::PICK);

    let changed = state.value() != Some(picked);

    let next_value = if changed && !mode.is_controlled() {
        Some(picked.to_string())
    } else {
        state.value().map(str::to_string)
    };

    tracing::debug!(
        target: targets::NOTIFY,
        id = %state.id(),
        picked,
        changed,
        ?mode,
        "user pick"
    );

    signals.selected.emit(picked.to_string());
    if changed {
        signals.changed.emit(picked.to_string());
    }

    PickOutcome {
        next_value,
        fired: Fired {
            select: true,
            change: changed,
        },
    }
}
