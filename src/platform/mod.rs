//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (`performance.now()`)
//! - The shaken container and timer readout elements
//!
//! Input wiring and scheduling live in the binary entry point.

#[cfg(target_arch = "wasm32")]
pub mod web;
