// Example: a single-match scroll spy (highlight one nav entry at a time),
// driven by debounced scroll events.
use inview::{
    ElementId, ElementRect, GeometrySource, SelectionMode, TrackerOptions, Viewport,
    VisibilityMode,
};
use inview_adapter::Controller;

struct Page {
    scroll_y: f64,
}

impl GeometrySource<ElementId> for Page {
    fn viewport(&self) -> Viewport {
        Viewport::new(800.0)
    }

    fn rect(&self, element: &ElementId) -> Option<ElementRect> {
        let document_top = *element as f64 * 900.0;
        Some(ElementRect::from_vertical(
            document_top - self.scroll_y,
            document_top + 900.0 - self.scroll_y,
        ))
    }
}

fn main() {
    let mut page = Page { scroll_y: 0.0 };
    let options = TrackerOptions::new(vec![0, 1, 2, 3])
        .with_threshold(50.0)
        .with_mode(VisibilityMode::ViewportRelative)
        .with_selection(SelectionMode::FirstMatching)
        .with_scroll_debounce_ms(100)
        .with_on_enter(|e: &ElementId| println!("  highlight nav link {e}"))
        .with_on_exit(|e: &ElementId| println!("  unhighlight nav link {e}"));

    let mut c = Controller::new(options, &page);
    println!("initial: {:?}", c.tracker().in_view());

    // A burst of scroll events, then quiet: one evaluation runs at t=150.
    let mut now_ms = 0u64;
    for _ in 0..5 {
        page.scroll_y += 250.0;
        c.on_scroll(now_ms);
        assert!(c.tick(now_ms, &page).is_none());
        now_ms += 10;
    }

    while c.has_pending_evaluation() {
        now_ms += 10;
        if let Some(diff) = c.tick(now_ms, &page) {
            println!("evaluated at t={now_ms}ms: {diff:?}");
        }
    }
    println!("current: {:?}", c.tracker().in_view());
}
