use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{ElementId, SelectionMode, VisibilityMode};

/// A callback fired once per element entering the in-view set.
pub type OnEnterCallback<K> = Arc<dyn Fn(&K) + Send + Sync>;

/// A callback fired once per element leaving the in-view set.
pub type OnExitCallback<K> = Arc<dyn Fn(&K) + Send + Sync>;

/// Configuration for [`crate::Tracker`].
///
/// This type is designed to be cheap to clone: callbacks are stored in `Arc`s
/// so hosts can build variants of a configuration without reallocating
/// closures.
///
/// `threshold`, `mode`, and `selection` are fixed for a tracker's lifetime,
/// as is the element list: elements attached to the document after
/// construction are not tracked.
pub struct TrackerOptions<K = ElementId> {
    /// The elements to observe, in document order. Captured once.
    pub elements: Vec<K>,

    /// Minimum visible percentage, exclusive: an element qualifies only when
    /// its visible percentage is strictly greater than this.
    pub threshold: f64,

    /// Denominator choice for the visible percentage.
    pub mode: VisibilityMode,

    /// Report every qualifying element, or only one.
    pub selection: SelectionMode,

    /// Enables/disables the tracker. A disabled tracker reports an empty
    /// in-view set and skips evaluation.
    pub enabled: bool,

    /// Optional callback fired for each element entering the in-view set.
    pub on_enter: Option<OnEnterCallback<K>>,

    /// Optional callback fired for each element leaving the in-view set.
    pub on_exit: Option<OnExitCallback<K>>,

    /// Quiet period required after the last scroll event before a
    /// scroll-triggered re-evaluation runs.
    pub scroll_debounce_ms: u64,

    /// Quiet period for resize-triggered re-evaluation. Defaults longer than
    /// scroll: resize events are rarer but invalidate more geometry.
    pub resize_debounce_ms: u64,
}

impl<K> Clone for TrackerOptions<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            threshold: self.threshold,
            mode: self.mode,
            selection: self.selection,
            enabled: self.enabled,
            on_enter: self.on_enter.clone(),
            on_exit: self.on_exit.clone(),
            scroll_debounce_ms: self.scroll_debounce_ms,
            resize_debounce_ms: self.resize_debounce_ms,
        }
    }
}

impl TrackerOptions<ElementId> {
    /// Creates options for elements keyed by index (`ElementId = u64`).
    pub fn from_count(count: usize) -> Self {
        Self::new((0..count as u64).collect())
    }
}

impl<K> TrackerOptions<K> {
    /// Creates options with defaults matching common scroll-spy usage:
    /// threshold 20%, element-relative, all matching elements reported,
    /// scroll evaluation undebounced, resize debounced at 200ms.
    pub fn new(elements: Vec<K>) -> Self {
        Self {
            elements,
            threshold: 20.0,
            mode: VisibilityMode::ElementRelative,
            selection: SelectionMode::AllMatching,
            enabled: true,
            on_enter: None,
            on_exit: None,
            scroll_debounce_ms: 0,
            resize_debounce_ms: 200,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_mode(mut self, mode: VisibilityMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_selection(mut self, selection: SelectionMode) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_on_enter(mut self, on_enter: impl Fn(&K) + Send + Sync + 'static) -> Self {
        self.on_enter = Some(Arc::new(on_enter));
        self
    }

    pub fn with_on_exit(mut self, on_exit: impl Fn(&K) + Send + Sync + 'static) -> Self {
        self.on_exit = Some(Arc::new(on_exit));
        self
    }

    pub fn with_scroll_debounce_ms(mut self, scroll_debounce_ms: u64) -> Self {
        self.scroll_debounce_ms = scroll_debounce_ms;
        self
    }

    pub fn with_resize_debounce_ms(mut self, resize_debounce_ms: u64) -> Self {
        self.resize_debounce_ms = resize_debounce_ms;
        self
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for TrackerOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrackerOptions")
            .field("elements", &self.elements)
            .field("threshold", &self.threshold)
            .field("mode", &self.mode)
            .field("selection", &self.selection)
            .field("enabled", &self.enabled)
            .field("scroll_debounce_ms", &self.scroll_debounce_ms)
            .field("resize_debounce_ms", &self.resize_debounce_ms)
            .finish_non_exhaustive()
    }
}
