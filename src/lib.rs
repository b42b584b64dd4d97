//! Host-testable library for bathbuzzer.
//!
//! Everything the main loop decides lives here and is free of hardware:
//! connection edge tracking, the switch-to-code mapping, and the
//! per-tick orchestration. The embedded binary (`main.rs`, feature
//! `embedded`) supplies the SoftDevice-backed [`notifier::Transport`] and
//! the GPIO-backed [`switch::SwitchInput`].
//!
//! Usage: `cargo test` (no features) on the host.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
pub mod error;
pub mod link;
pub mod notifier;
pub mod switch;

pub use app::{App, Tick};
pub use error::{BleError, Error};
pub use link::{ConnectionTracker, LinkEdge, LinkStatus};
pub use notifier::{Publish, Transport};
pub use switch::{PinLevel, SwitchCode, SwitchInput};

// ═══════════════════════════════════════════════════════════════════════════
// Cross-module tests
// ═══════════════════════════════════════════════════════════════════════════
