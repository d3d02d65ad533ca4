use inview::{ElementId, ElementKey, GeometrySource, InViewDiff, Tracker, TrackerOptions};

use crate::Debouncer;

/// A framework-neutral controller that wraps an [`inview::Tracker`] and
/// schedules its re-evaluations.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll(now_ms)` / `on_resize(now_ms)` when the host events occur
///   (no payload is consumed beyond "something changed")
/// - `tick(now_ms, geometry)` each frame/timer tick
///
/// Scroll and resize use independent debounce timers (configured via
/// [`TrackerOptions::scroll_debounce_ms`] and
/// [`TrackerOptions::resize_debounce_ms`]): a burst of scroll events never
/// cancels a pending resize-triggered evaluation, and vice versa. When both
/// timers fire on the same tick, a single evaluation runs.
#[derive(Clone, Debug)]
pub struct Controller<K = ElementId> {
    tracker: Tracker<K>,
    scroll: Debouncer,
    resize: Debouncer,
}

impl<K: ElementKey> Controller<K> {
    /// Creates a controller. The wrapped tracker runs its eager initial
    /// evaluation here, before any event.
    pub fn new(options: TrackerOptions<K>, geometry: &impl GeometrySource<K>) -> Self {
        let scroll = Debouncer::new(options.scroll_debounce_ms);
        let resize = Debouncer::new(options.resize_debounce_ms);
        Self {
            tracker: Tracker::new(options, geometry),
            scroll,
            resize,
        }
    }

    pub fn from_tracker(tracker: Tracker<K>) -> Self {
        let scroll = Debouncer::new(tracker.options().scroll_debounce_ms);
        let resize = Debouncer::new(tracker.options().resize_debounce_ms);
        Self {
            tracker,
            scroll,
            resize,
        }
    }

    pub fn tracker(&self) -> &Tracker<K> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut Tracker<K> {
        &mut self.tracker
    }

    pub fn into_tracker(self) -> Tracker<K> {
        self.tracker
    }

    /// True if either debouncer has a pending evaluation scheduled.
    pub fn has_pending_evaluation(&self) -> bool {
        self.scroll.is_pending() || self.resize.is_pending()
    }

    /// Call this when the host reports a scroll event.
    ///
    /// Reschedules the scroll debouncer; the pending resize deadline (if
    /// any) is untouched.
    pub fn on_scroll(&mut self, now_ms: u64) {
        self.scroll.trigger(now_ms);
    }

    /// Call this when the host reports a resize event.
    pub fn on_resize(&mut self, now_ms: u64) {
        self.resize.trigger(now_ms);
    }

    /// Advances the controller.
    ///
    /// Polls both debouncers; if either fires, runs one tracker evaluation
    /// against fresh geometry and returns its transitions. Returns `None`
    /// when no evaluation was due.
    pub fn tick(&mut self, now_ms: u64, geometry: &impl GeometrySource<K>) -> Option<InViewDiff<K>> {
        let scroll_due = self.scroll.poll(now_ms);
        let resize_due = self.resize.poll(now_ms);
        if !(scroll_due || resize_due) {
            return None;
        }
        Some(self.tracker.evaluate(geometry))
    }

    /// Runs an evaluation immediately, bypassing and clearing any pending
    /// debounce deadlines.
    pub fn evaluate_now(&mut self, geometry: &impl GeometrySource<K>) -> InViewDiff<K> {
        self.scroll.cancel();
        self.resize.cancel();
        self.tracker.evaluate(geometry)
    }
}
