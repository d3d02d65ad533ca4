//! A headless in-view tracking engine.
//!
//! For adapter-level utilities (debounced scroll/resize scheduling), see the
//! `inview-adapter` crate.
//!
//! This crate focuses on the core logic needed to keep "which elements are
//! currently visible" up to date while a document scrolls: a pure visibility
//! classifier (clipped-height percentage against a threshold), an identity
//! diff that turns two classifications into enter/exit transitions, and a
//! small stateful [`Tracker`] that owns the current in-view set and drives
//! the registered callbacks.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - the viewport height
//! - per-element bounding rects (re-queried on every evaluation)
//! - the scroll/resize events that schedule re-evaluation
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod classify;
mod diff;
mod key;
mod options;
mod state;
mod tracker;
mod types;


pub use classify::{in_view_keys, visible_percent};
pub use diff::diff;
pub use key::ElementKey;
pub use options::{OnEnterCallback, OnExitCallback, TrackerOptions};
pub use state::TrackerState;
pub use tracker::{GeometrySource, Tracker};
pub use types::{ElementId, ElementRect, InViewDiff, SelectionMode, Viewport, VisibilityMode};
