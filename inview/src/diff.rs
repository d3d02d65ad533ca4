use crate::{ElementKey, InViewDiff};

/// Computes the enter/exit transitions between two classifications.
///
/// Elements are compared by key identity: `exited` is `prev \ next` in `prev`
/// order, `entered` is `next \ prev` in `next` order. An element present in
/// both inputs appears in neither output, so retained elements are never
/// re-notified.
pub fn diff<K: ElementKey>(prev: &[K], next: &[K]) -> InViewDiff<K> {
    let exited = prev
        .iter()
        .filter(|element| !next.contains(element))
        .cloned()
        .collect();
    let entered = next
        .iter()
        .filter(|element| !prev.contains(element))
        .cloned()
        .collect();

    InViewDiff { entered, exited }
}
