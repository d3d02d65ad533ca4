use alloc::vec::Vec;

/// How the visible-percentage denominator is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibilityMode {
    /// Percentage of the element's own height that is visible.
    ElementRelative,
    /// Percentage of the viewport's height covered by the element.
    ViewportRelative,
}

/// Whether a classification reports every qualifying element or only one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionMode {
    /// Every element clearing the threshold, in input order.
    AllMatching,
    /// At most one element.
    ///
    /// The scan runs in reverse input order and stops at the first hit, so
    /// the reported element is the *last* qualifying element in input order.
    /// This matches the behavior of single-match scroll spies that highlight
    /// one nav entry at a time.
    FirstMatching,
}

/// The observation frame. Element geometry is reported relative to its origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub height: f64,
}

impl Viewport {
    pub fn new(height: f64) -> Self {
        Self { height }
    }
}

/// A bounding rect for one tracked element, relative to the viewport origin.
///
/// `top` is negative when the element starts above the viewport; `bottom`
/// exceeds the viewport height when it extends below. Only the vertical
/// extent participates in classification; `left`/`right` are carried so a
/// geometry source can hand over a full rect unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementRect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl ElementRect {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// A rect with only a vertical extent (the horizontal extent is unused
    /// by classification).
    pub fn from_vertical(top: f64, bottom: f64) -> Self {
        Self {
            top,
            bottom,
            left: 0.0,
            right: 0.0,
        }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Default opaque element handle.
///
/// Tracker APIs are generic over the key type; hosts that already have stable
/// element identifiers (node ids, widget ids) can use those directly.
pub type ElementId = u64;

/// The enter/exit transitions produced by one evaluation.
///
/// An element retained across two evaluations appears in neither list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InViewDiff<K> {
    /// Elements newly classified in-view, in new-classification order.
    pub entered: Vec<K>,
    /// Elements no longer in-view, in previous-classification order.
    pub exited: Vec<K>,
}

impl<K> InViewDiff<K> {
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

impl<K> Default for InViewDiff<K> {
    fn default() -> Self {
        Self {
            entered: Vec::new(),
            exited: Vec::new(),
        }
    }
}
