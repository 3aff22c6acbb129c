use super::*;
use crate::foundation::core::Rect;
use crate::motion::viewport::Viewport;

fn page() -> Viewport {
    let sections = [
        ("home", 0.0, 900.0),
        ("about", 900.0, 1600.0),
        ("experience", 1600.0, 2600.0),
        ("cv", 2600.0, 3200.0),
        ("projects", 3200.0, 4400.0),
        ("contact", 4400.0, 5200.0),
    ];
    let mut vp = Viewport::new(1280.0, 800.0);
    for (id, top, bottom) in sections {
        vp.set_element(id, Rect::new(0.0, top, 1280.0, bottom));
    }
    vp
}

fn controller() -> ScrollNavController {
    ScrollNavController::new(&NavConfig::default()).unwrap()
}

fn scroll(nav: &mut ScrollNavController, vp: &mut Viewport, y: f64) -> bool {
    vp.set_scroll(y);
    nav.on_scroll();
    nav.on_animation_frame(&*vp)
}

#[test]
fn starts_on_first_section() {
    let nav = controller();
    assert_eq!(nav.active(), "home");
    assert_eq!(nav.active_entry().label, "Home");
    assert_eq!(nav.sections().len(), 6);
}

#[test]
fn scroll_zero_is_home_even_with_anchor_on_reference_line() {
    let mut vp = page();
    vp.set_element("about", Rect::new(0.0, 0.0, 1280.0, 10.0));
    let mut nav = controller();
    scroll(&mut nav, &mut vp, 0.0);
    assert_eq!(nav.active(), "home");
}

#[test]
fn nearest_anchor_above_reference_line_wins() {
    let mut vp = page();
    let mut nav = controller();
    // Reference line at 3100 + 0.15 * 800 = 3220, just past the projects anchor.
    assert!(scroll(&mut nav, &mut vp, 3100.0));
    assert_eq!(nav.active(), "projects");
    // Line at 3190: projects not reached yet.
    scroll(&mut nav, &mut vp, 3070.0);
    assert_eq!(nav.active(), "cv");
}

#[test]
fn near_top_counts_as_home() {
    let mut vp = page();
    let mut nav = controller();
    scroll(&mut nav, &mut vp, 2000.0);
    assert_eq!(nav.active(), "experience");
    scroll(&mut nav, &mut vp, 3.0);
    assert_eq!(nav.active(), "home");
}

#[test]
fn recompute_happens_once_per_frame() {
    let mut vp = page();
    let mut nav = controller();
    vp.set_scroll(1000.0);
    nav.on_scroll();
    nav.on_scroll();
    assert!(nav.is_dirty());
    assert!(nav.on_animation_frame(&vp));
    assert!(!nav.on_animation_frame(&vp));

    // Without a scroll event the frame does not look at geometry.
    vp.set_scroll(4500.0);
    assert!(!nav.on_animation_frame(&vp));
    assert_eq!(nav.active(), "about");
}

#[test]
fn click_is_optimistic_and_scrolls_with_offset() {
    let mut vp = page();
    let mut nav = controller();
    let out = nav.click("projects", &mut vp, TimeMs(0)).unwrap();
    assert!(out.prevent_default);
    assert_eq!(out.target_offset, 3120.0);
    assert_eq!(nav.active(), "projects");
    assert!(vp.is_scrolling());
    assert_eq!(vp.scroll_offset(), 0.0);

    vp.advance(TimeMs(600));
    nav.on_scroll();
    nav.on_animation_frame(&vp);
    assert_eq!(vp.scroll_offset(), 3120.0);
    assert_eq!(nav.active(), "projects");
}

#[test]
fn clicking_home_scrolls_to_top() {
    let mut vp = page();
    let mut nav = controller();
    scroll(&mut nav, &mut vp, 2000.0);
    let out = nav.click("#home", &mut vp, TimeMs(0)).unwrap();
    assert_eq!(out.target_offset, 0.0);
    assert_eq!(nav.active(), "home");
    vp.advance(TimeMs(600));
    assert_eq!(vp.scroll_offset(), 0.0);
}

#[test]
fn unknown_anchor_changes_nothing() {
    let mut vp = page();
    let mut nav = controller();
    scroll(&mut nav, &mut vp, 2000.0);
    assert!(nav.click("blog", &mut vp, TimeMs(0)).is_err());
    assert_eq!(nav.active(), "experience");
    assert!(!vp.is_scrolling());
}

#[test]
fn last_write_wins_between_scroll_and_click() {
    let mut vp = page();
    let mut nav = controller();
    vp.set_scroll(2000.0);

    // Scroll then click in the same turn: the click wins.
    nav.on_scroll();
    nav.click("contact", &mut vp, TimeMs(0)).unwrap();
    assert!(!nav.on_animation_frame(&vp));
    assert_eq!(nav.active(), "contact");

    // Click then scroll: the scroll-derived section wins.
    vp.set_scroll(2000.0);
    nav.click("cv", &mut vp, TimeMs(10)).unwrap();
    nav.on_scroll();
    nav.on_animation_frame(&vp);
    assert_eq!(nav.active(), "experience");
}
