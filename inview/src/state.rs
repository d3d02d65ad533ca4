use alloc::vec::Vec;

use crate::ElementId;

/// A lightweight, serializable snapshot of a tracker's in-view set.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
/// Restoring a snapshot replaces the tracker's state without firing
/// callbacks; the next evaluation diffs against the restored set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerState<K = ElementId> {
    pub in_view: Vec<K>,
}

impl<K> Default for TrackerState<K> {
    fn default() -> Self {
        Self { in_view: Vec::new() }
    }
}
