//! Application-level configuration.
//!
//! - [`SessionParams`]: quiz loop control (duration, tick pacing, reveal delay, scoring)

pub mod session_params;

pub use session_params::SessionParams;
