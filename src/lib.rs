//! Library exports for reusing the vectorshop core.
//!
//! Exposes the canvas state machine, palette, and exporter alongside their
//! supporting modules so that UI shells and the integration tests can share
//! the drawing logic with the main binary.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod session;
pub mod util;

pub use config::Config;
