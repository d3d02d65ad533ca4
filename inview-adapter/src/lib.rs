//! Adapter utilities for the `inview` crate.
//!
//! The `inview` crate is UI-agnostic and focuses on the core classification
//! and state. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - A cancellable debounce timer driven by injected timestamps (no real
//!   timers, deterministic in tests)
//! - A controller that wires scroll/resize events through independent
//!   debouncers into tracker evaluations
//!
//! This crate is intentionally framework-agnostic (no DOM/winit bindings).
//! The host owns event listener registration and teardown; it reports events
//! via `on_scroll`/`on_resize` and calls `tick(now_ms)` on its own cadence
//! (frame callback, timer, or event-queue turn).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod debounce;


pub use controller::Controller;
pub use debounce::Debouncer;
