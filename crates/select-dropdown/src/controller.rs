//! Selection reconciliation.
//!
//! The controller has no named states. It is a pair of pure functions over
//! [`SelectionState`]:
//!
//! - [`init`] derives the first state from a configuration.
//! - [`reconcile`] derives the next state when the configuration changes,
//!   returning `None` when nothing observable changed so the caller can skip
//!   any downstream refresh.
//!
//! Value resolution is the same in both: a controlled `value` is adopted only
//! if the model contains it; otherwise `default_value` is used as-is, without
//! checking the model. Trusting the default lets a value be shown while the
//! options are still loading.

use std::sync::Arc;

use select_dropdown_core::logging::{span_names, targets};
use select_dropdown_core::{IdSource, PerfSpan, WidgetId};

use crate::config::SelectConfig;
use crate::equality::models_equal;
use crate::error::{Error, Result};
use crate::options::OptionModel;

/// Who owns the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// The parent owns the value and feeds it back through configuration.
    Controlled,
    /// The widget owns the value and updates it on user picks.
    Uncontrolled,
}

impl SelectionMode {
    /// The mode implied by a configuration.
    pub fn of(config: &SelectConfig) -> Self {
        if config.is_controlled() {
            Self::Controlled
        } else {
            Self::Uncontrolled
        }
    }

    /// Whether this is controlled mode.
    pub fn is_controlled(self) -> bool {
        self == Self::Controlled
    }
}

/// The resolved state of one dropdown instance.
#[derive(Debug, Clone)]
pub struct SelectionState {
    id: WidgetId,
    id_supplied: bool,
    value: Option<String>,
    model: Arc<OptionModel>,
}

impl SelectionState {
    /// Assemble a state directly, with a generated id.
    pub fn new(id: WidgetId, value: Option<String>, model: Arc<OptionModel>) -> Self {
        Self {
            id,
            id_supplied: false,
            value,
            model,
        }
    }

    /// Mark the id as supplied by the configuration rather than generated.
    pub fn with_supplied_id(mut self) -> Self {
        self.id_supplied = true;
        self
    }

    /// The immutable instance id.
    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// The current value, or `None` for no selection.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The canonical option model.
    pub fn model(&self) -> &Arc<OptionModel> {
        &self.model
    }

    /// Whether the id came from the configuration.
    ///
    /// A supplied id must be repeated on every later configuration pass.
    pub fn id_supplied(&self) -> bool {
        self.id_supplied
    }

    /// A copy of this state with a different value; the model is shared.
    pub fn with_value(&self, value: Option<String>) -> Self {
        Self {
            id: self.id.clone(),
            id_supplied: self.id_supplied,
            value,
            model: Arc::clone(&self.model),
        }
    }
}

/// Derive the initial state from a configuration.
///
/// The id comes from `config.id` when supplied, otherwise from `ids`.
pub fn init(config: &SelectConfig, ids: &mut dyn IdSource) -> SelectionState {
    let model = OptionModel::build(config.option_source(), config.allow_empty_groups);
    let id = match &config.id {
        Some(id) => WidgetId::new(id.clone()),
        None => ids.next_id(),
    };
    let value = resolve_value(config, &model);

    tracing::debug!(
        target: targets::CONTROLLER,
        id = %id,
        value = value.as_deref().unwrap_or(""),
        mode = ?SelectionMode::of(config),
        "initialized selection"
    );

    let state = SelectionState::new(id, value, Arc::new(model));
    if config.id.is_some() {
        state.with_supplied_id()
    } else {
        state
    }
}

/// Derive the next state after a configuration change.
///
/// Returns `Ok(None)` when neither the model nor the value changed. The
/// previous model is kept (same `Arc`) when the rebuilt one is structurally
/// equal to it.
///
/// # Errors
///
/// Returns [`Error::IdChanged`] when `new_config.id` names a different id,
/// or omits an id that was supplied at creation. A generated id may stay
/// absent from later configurations.
pub fn reconcile(prev: &SelectionState, new_config: &SelectConfig) -> Result<Option<SelectionState>> {
    let _perf = PerfSpan::new(span_names::RECONCILE);

    let requested = new_config.id.as_deref();
    let id_changed = match requested {
        Some(requested) => prev.id.as_str() != requested,
        None => prev.id_supplied,
    };
    if id_changed {
        tracing::error!(
            target: targets::CONTROLLER,
            current = %prev.id,
            requested = requested.unwrap_or(""),
            "the id of a select widget is not supposed to be updated"
        );
        return Err(Error::id_changed(prev.id.clone(), requested));
    }

    let rebuilt = OptionModel::build(new_config.option_source(), new_config.allow_empty_groups);
    let model_changed = !models_equal(&prev.model, &rebuilt);
    let model = if model_changed {
        Arc::new(rebuilt)
    } else {
        Arc::clone(&prev.model)
    };

    let value = resolve_value(new_config, &model);
    let value_changed = value != prev.value;

    tracing::trace!(
        target: targets::CONTROLLER,
        id = %prev.id,
        model_changed,
        value_changed,
        "reconciled configuration"
    );

    if !model_changed && !value_changed {
        return Ok(None);
    }

    Ok(Some(SelectionState {
        id: prev.id.clone(),
        id_supplied: prev.id_supplied,
        value,
        model,
    }))
}

/// Whether `value` names an option in `model`.
pub fn validate_value(value: Option<&str>, model: &OptionModel) -> bool {
    value.is_some_and(|value| model.contains(value))
}

fn resolve_value(config: &SelectConfig, model: &OptionModel) -> Option<String> {
    if validate_value(config.value.as_deref(), model) {
        config.value.clone()
    } else {
        config.default_value.clone()
    }
}
