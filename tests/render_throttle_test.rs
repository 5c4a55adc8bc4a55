use tui_memory::term::RenderThrottle;

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
}

#[test]
fn render_throttle_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    assert!(t.should_render(1, 2));
}

#[test]
fn render_throttle_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    assert!(!t.should_render(10, 1));
    assert!(!t.should_render(249, 1));
    assert!(t.should_render(250, 1));
    assert!(!t.should_render(251, 1));
}

#[test]
fn render_throttle_invalidate_forces_next_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    t.invalidate();
    assert!(t.should_render(5, 1));
    assert!(!t.should_render(6, 1));
}
