//! The `app` module is the core of the storefront application.
//!
//! It owns the overall state (active language, card selection, vote
//! counters), routes keyboard and mouse input, and coordinates the vote
//! store and the analytics manager. Rendering lives in `crate::ui` and only
//! reads this state.

/// `actions` module: the single source of truth for executing a
/// `CommandAction` (vote, view, share, language and section switches).
mod actions;
/// `init` module: construction of the `App` state from loaded settings.
mod init;
/// `keyboard` module: all keyboard input handling.
mod keyboard;
/// `mouse` module: click handling over the hit areas registered by the
/// render pass.
mod mouse;
/// `state` module: the `App` struct and the overlay state type.
mod state;
/// `tick` module: periodic housekeeping (toast expiry, analytics drain).
mod tick;

pub use actions::CommandAction;
pub use state::{App, OverlayState};
