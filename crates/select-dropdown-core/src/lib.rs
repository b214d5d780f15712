//! Core systems for select-dropdown.
//!
//! This crate provides the building blocks shared by the dropdown widget:
//!
//! - **Signal/Slot System**: Type-safe notification of picks and changes
//! - **Widget Ids**: Stable instance identifiers from an injectable source
//! - **Logging**: `tracing` targets, span guards and tree formatting helpers
//!
//! # Signal/Slot Example
//!
//! ```
//! use select_dropdown_core::Signal;
//!
//! // Create a signal that notifies when a value is picked
//! let picked = Signal::<String>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = picked.connect(|value| {
//!     println!("Picked: {}", value);
//! });
//!
//! picked.emit("day".to_string());
//!
//! // Disconnect when done
//! picked.disconnect(conn_id);
//! ```
//!
//! # Id Example
//!
//! ```
//! use select_dropdown_core::{IdSource, SequentialIdSource};
//!
//! let mut ids = SequentialIdSource::new("timespan");
//! assert_eq!(ids.next_id().as_str(), "timespan-1");
//! assert_eq!(ids.next_id().as_str(), "timespan-2");
//! ```

mod error;
pub mod id;
pub mod logging;
pub mod signal;

pub use error::SignalError;
pub use id::{IdSource, RandomIdSource, SequentialIdSource, WidgetId, DEFAULT_ID_PREFIX};
pub use logging::{PerfSpan, TreeFormatOptions, TreeStyle};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
