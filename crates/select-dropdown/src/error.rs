//! Error types for the dropdown widget.

use select_dropdown_core::WidgetId;

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a dropdown.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration pass tried to change the widget id.
    ///
    /// The id is fixed for the lifetime of an instance; this is a
    /// programming error in the caller.
    /// `requested` is `None` when a supplied id was dropped from the
    /// configuration.
    #[error(
        "The `id` of select widget '{current}' cannot be changed to '{}'",
        .requested.as_ref().map_or("<none>", WidgetId::as_str)
    )]
    IdChanged {
        current: WidgetId,
        requested: Option<WidgetId>,
    },

    /// TOML configuration could not be parsed.
    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON configuration could not be parsed.
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an id-change error.
    pub fn id_changed(current: impl Into<WidgetId>, requested: Option<&str>) -> Self {
        Self::IdChanged {
            current: current.into(),
            requested: requested.map(WidgetId::from),
        }
    }
}
