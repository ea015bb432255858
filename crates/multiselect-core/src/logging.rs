//! Logging facilities for the multiselect crates.
//!
//! Instrumentation uses the `tracing` crate. The library only emits events;
//! to see them, install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Events are emitted at `trace` level under the targets listed in
//! [`targets`], so a directive such as `multiselect_core::signal=trace`
//! enables signal emission logs only.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "multiselect_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "multiselect_core::signal";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_share_crate_prefix() {
        // Filter directives for the crate target must also match subsystems
        assert!(targets::SIGNAL.starts_with(targets::CORE));
    }
}
