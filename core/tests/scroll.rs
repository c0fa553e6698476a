use thumbcrafter_core::scroll::{reveal_triggered, NavbarState};

#[test]
fn reveal_boundary_at_80_percent_of_viewport() {
    assert!(reveal_triggered(799.0, 1000.0));
    assert!(!reveal_triggered(800.0, 1000.0));
    assert!(!reveal_triggered(801.0, 1000.0));
}

#[test]
fn above_fold_elements_reveal_immediately() {
    assert!(reveal_triggered(0.0, 1000.0));
    assert!(reveal_triggered(-120.0, 1000.0));
}

#[test]
fn navbar_opacity_switches_past_50() {
    let mut state = NavbarState::new();
    assert!(!state.observe(0.0).opaque);
    assert!(!state.observe(50.0).opaque);
    assert!(state.observe(51.0).opaque);
}

#[test]
fn navbar_hides_scrolling_down_past_100() {
    let mut state = NavbarState::new();
    assert!(!state.observe(80.0).hidden);
    assert!(state.observe(150.0).hidden);
}

#[test]
fn navbar_shows_again_on_upward_scroll() {
    let mut state = NavbarState::new();
    assert!(state.observe(150.0).hidden);
    let phase = state.observe(120.0);
    assert!(!phase.hidden);
    assert!(phase.opaque);
}

#[test]
fn shallow_scroll_down_keeps_navbar_visible() {
    let mut state = NavbarState::new();
    assert!(!state.observe(60.0).hidden);
    assert!(!state.observe(90.0).hidden);
}

#[test]
fn repeated_offset_counts_as_not_scrolling_down() {
    let mut state = NavbarState::new();
    state.observe(150.0);
    assert!(!state.observe(150.0).hidden);
}
