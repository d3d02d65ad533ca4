use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    ElementId, ElementRect, InViewDiff, TrackerOptions, TrackerState, Viewport, classify, diff,
};
use crate::{ElementKey, SelectionMode, VisibilityMode};

/// The injected geometry provider.
///
/// The tracker never reads the host document directly; it asks this source
/// for the viewport and per-element rects on every evaluation. Implementors
/// must not cache across evaluations on the tracker's behalf; both queries
/// are re-issued each time.
///
/// `rect` returns `None` for an element whose geometry cannot be read (e.g.
/// a node detached from the document after the tracker was constructed);
/// such an element is treated as not in view for that evaluation only.
pub trait GeometrySource<K = ElementId> {
    /// The current observation frame.
    fn viewport(&self) -> Viewport;

    /// The current bounding rect of `element`, relative to the viewport
    /// origin, or `None` if it cannot be read.
    fn rect(&self, element: &K) -> Option<ElementRect>;
}

impl<K, G: GeometrySource<K>> GeometrySource<K> for &G {
    fn viewport(&self) -> Viewport {
        (*self).viewport()
    }

    fn rect(&self, element: &K) -> Option<ElementRect> {
        (*self).rect(element)
    }
}

/// A headless in-view tracker.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects, only opaque element keys.
/// - Your adapter drives it by providing geometry and calling [`evaluate`]
///   when (debounced) scroll/resize events fire.
/// - DOM/style mutation happens only through the `on_enter`/`on_exit`
///   callbacks; the tracker itself is pure state.
///
/// The in-view set is owned exclusively by one tracker. Multiple trackers
/// may observe overlapping element lists with no coordination; each diffs
/// its own state in isolation.
///
/// Callbacks are invoked synchronously inside [`evaluate`] and are expected
/// not to panic. A panicking callback unwinds out of the evaluation and the
/// remaining callbacks of that batch are not delivered.
///
/// [`evaluate`]: Tracker::evaluate
#[derive(Clone, Debug)]
pub struct Tracker<K = ElementId> {
    options: TrackerOptions<K>,
    in_view: Vec<K>,
}

impl<K: ElementKey> Tracker<K> {
    /// Creates a new tracker and runs one eager evaluation.
    ///
    /// The initial classification happens synchronously here, before any
    /// scroll/resize event, so hosts can establish initial classes/styles
    /// immediately.
    pub fn new(options: TrackerOptions<K>, geometry: &impl GeometrySource<K>) -> Self {
        ivdebug!(
            elements = options.elements.len(),
            threshold = options.threshold,
            enabled = options.enabled,
            "Tracker::new"
        );
        let mut tracker = Self {
            options,
            in_view: Vec::new(),
        };
        tracker.evaluate(geometry);
        tracker
    }

    pub fn options(&self) -> &TrackerOptions<K> {
        &self.options
    }

    /// The fixed element list, in the order supplied at construction.
    pub fn elements(&self) -> &[K] {
        &self.options.elements
    }

    /// The elements classified in-view by the last evaluation, in element
    /// list order. Always a subset of [`elements`](Tracker::elements); at
    /// most one entry under [`SelectionMode::FirstMatching`].
    pub fn in_view(&self) -> &[K] {
        &self.in_view
    }

    pub fn is_in_view(&self, element: &K) -> bool {
        self.in_view.contains(element)
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    /// Enables/disables the tracker.
    ///
    /// Disabling clears the in-view set and fires `on_exit` for each cleared
    /// element, so host-side classes are cleaned up. Re-enabling does not
    /// evaluate by itself; the next [`evaluate`](Tracker::evaluate) call
    /// repopulates the set.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        if !enabled {
            let exited = core::mem::take(&mut self.in_view);
            ivdebug!(exited = exited.len(), "Tracker disabled");
            if let Some(on_exit) = &self.options.on_exit {
                for element in &exited {
                    on_exit(element);
                }
            }
        }
    }

    /// Replaces the enter callback. The classification rules themselves
    /// (threshold, mode, selection, element list) are fixed at construction.
    pub fn set_on_enter(&mut self, on_enter: Option<impl Fn(&K) + Send + Sync + 'static>) {
        self.options.on_enter = on_enter.map(|f| Arc::new(f) as _);
    }

    /// Replaces the exit callback.
    pub fn set_on_exit(&mut self, on_exit: Option<impl Fn(&K) + Send + Sync + 'static>) {
        self.options.on_exit = on_exit.map(|f| Arc::new(f) as _);
    }

    /// Re-classifies all tracked elements and dispatches transitions.
    ///
    /// Runs the classifier against fresh geometry, diffs the result against
    /// the stored in-view set, fires `on_exit` for each exited element then
    /// `on_enter` for each entered element (retained elements are not
    /// re-notified), replaces the stored set, and returns the diff.
    ///
    /// Two consecutive calls with unchanged geometry return an empty diff on
    /// the second call. When the tracker is disabled this is a no-op
    /// returning an empty diff.
    pub fn evaluate(&mut self, geometry: &impl GeometrySource<K>) -> InViewDiff<K> {
        if !self.options.enabled {
            return InViewDiff::default();
        }

        let viewport = geometry.viewport();
        let next = classify::in_view_keys(
            &self.options.elements,
            |element| geometry.rect(element),
            viewport,
            self.options.threshold,
            self.options.mode,
            self.options.selection,
        );
        let transitions = diff::diff(&self.in_view, &next);
        ivtrace!(
            in_view = next.len(),
            entered = transitions.entered.len(),
            exited = transitions.exited.len(),
            "Tracker::evaluate"
        );

        if let Some(on_exit) = &self.options.on_exit {
            for element in &transitions.exited {
                on_exit(element);
            }
        }
        if let Some(on_enter) = &self.options.on_enter {
            for element in &transitions.entered {
                on_enter(element);
            }
        }

        self.in_view = next;
        transitions
    }

    /// Returns a snapshot of the current in-view set.
    pub fn state(&self) -> TrackerState<K> {
        TrackerState {
            in_view: self.in_view.clone(),
        }
    }

    /// Restores a previously captured snapshot without firing callbacks.
    ///
    /// Snapshot entries that are not in this tracker's element list are
    /// dropped, preserving the subset invariant. The next evaluation diffs
    /// against the restored set.
    pub fn restore_state(&mut self, state: TrackerState<K>) {
        let elements = &self.options.elements;
        self.in_view = state
            .in_view
            .into_iter()
            .filter(|element| elements.contains(element))
            .collect();
    }

    pub fn threshold(&self) -> f64 {
        self.options.threshold
    }

    pub fn mode(&self) -> VisibilityMode {
        self.options.mode
    }

    pub fn selection(&self) -> SelectionMode {
        self.options.selection
    }
}
