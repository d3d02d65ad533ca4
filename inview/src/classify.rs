use alloc::vec::Vec;

use crate::{ElementKey, ElementRect, SelectionMode, Viewport, VisibilityMode};

/// Computes how much of `rect` is visible in `viewport`, as a percentage.
///
/// The denominator is the element's own height (`ElementRelative`) or the
/// viewport height (`ViewportRelative`). Fully off-screen rects short-circuit
/// to `0.0`. A zero-height element in element-relative mode (and a zero-height
/// viewport in viewport-relative mode) reports `0.0` rather than NaN/infinity.
pub fn visible_percent(rect: ElementRect, viewport: Viewport, mode: VisibilityMode) -> f64 {
    let view = viewport.height;
    if rect.top > view || rect.bottom < 0.0 {
        return 0.0;
    }

    let height = rect.bottom - rect.top;
    let top_clipped = (-rect.top).max(0.0);
    let bottom_clipped = (rect.bottom - view).max(0.0);
    let denominator = match mode {
        VisibilityMode::ViewportRelative => view,
        VisibilityMode::ElementRelative => height,
    };
    if denominator <= 0.0 {
        return 0.0;
    }

    (height - top_clipped - bottom_clipped) / denominator * 100.0
}

/// Classifies `elements` against `viewport` and returns the in-view subset.
///
/// `rect_of` is queried once per element per call; `None` (e.g. a node that
/// was detached since construction) skips that element without aborting the
/// scan. Qualification is strict: `visible_percent > threshold`.
///
/// The scan runs in reverse input order. With [`SelectionMode::FirstMatching`]
/// it stops at the first hit, yielding the last qualifying element in input
/// order; with [`SelectionMode::AllMatching`] the result is restored to input
/// order before returning.
pub fn in_view_keys<K: ElementKey>(
    elements: &[K],
    mut rect_of: impl FnMut(&K) -> Option<ElementRect>,
    viewport: Viewport,
    threshold: f64,
    mode: VisibilityMode,
    selection: SelectionMode,
) -> Vec<K> {
    let mut in_view = Vec::new();

    for element in elements.iter().rev() {
        let Some(rect) = rect_of(element) else {
            continue;
        };

        if visible_percent(rect, viewport, mode) > threshold {
            in_view.push(element.clone());

            if selection == SelectionMode::FirstMatching {
                break;
            }
        }
    }

    // Collected back-to-front; callers observe input order.
    in_view.reverse();
    in_view
}
