//! Core systems for the multiselect controller.
//!
//! This crate provides the foundational components shared by the multiselect
//! model layer:
//!
//! - **Signal/Slot System**: Type-safe change notification with explicit
//!   connection management
//! - **Logging**: `tracing` target names for filtering instrumentation
//!
//! # Signal/Slot Example
//!
//! ```
//! use multiselect_core::Signal;
//!
//! // Create a signal that notifies when a selection changes
//! let selection_changed = Signal::<Vec<u64>>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = selection_changed.connect(|ids| {
//!     println!("Selection is now: {:?}", ids);
//! });
//!
//! // Emit the signal
//! selection_changed.emit(vec![1, 2, 3]);
//!
//! // Disconnect when done
//! selection_changed.disconnect(conn_id);
//! ```
//!
//! # Scoped Connections
//!
//! When a connection should only live as long as a receiver, use
//! [`Signal::connect_scoped`] to get a guard that disconnects on drop:
//!
//! ```
//! use multiselect_core::Signal;
//!
//! let signal = Signal::<u32>::new();
//! {
//!     let _guard = signal.connect_scoped(|n| println!("got {}", n));
//!     signal.emit(1); // guard is alive, slot runs
//! }
//! signal.emit(2); // guard dropped, nothing runs
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
