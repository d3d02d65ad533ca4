// Example: classify three page sections against a scrolling viewport.
use inview::{
    ElementId, ElementRect, GeometrySource, Tracker, TrackerOptions, Viewport, VisibilityMode,
};

/// A fake page: three 600px sections stacked vertically, observed through an
/// 800px viewport at `scroll_y`.
struct Page {
    scroll_y: f64,
}

impl GeometrySource<ElementId> for Page {
    fn viewport(&self) -> Viewport {
        Viewport::new(800.0)
    }

    fn rect(&self, element: &ElementId) -> Option<ElementRect> {
        let document_top = *element as f64 * 600.0;
        Some(ElementRect::from_vertical(
            document_top - self.scroll_y,
            document_top + 600.0 - self.scroll_y,
        ))
    }
}

fn main() {
    let mut page = Page { scroll_y: 0.0 };
    let options = TrackerOptions::new(vec![0, 1, 2])
        .with_threshold(20.0)
        .with_mode(VisibilityMode::ViewportRelative)
        .with_on_enter(|e: &ElementId| println!("  section {e} entered view"))
        .with_on_exit(|e: &ElementId| println!("  section {e} exited view"));

    println!("initial classification:");
    let mut tracker = Tracker::new(options, &page);
    println!("in view: {:?}", tracker.in_view());

    for scroll_y in [300.0, 700.0, 1200.0] {
        page.scroll_y = scroll_y;
        println!("scrolled to {scroll_y}:");
        tracker.evaluate(&page);
        println!("in view: {:?}", tracker.in_view());
    }
}
