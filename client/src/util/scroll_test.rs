use super::*;

#[test]
fn interpolate_clamps_to_output_range() {
    assert_eq!(interpolate(-5.0, (0.0, 100.0), (92.0, 64.0)), 92.0);
    assert_eq!(interpolate(50.0, (0.0, 100.0), (92.0, 64.0)), 78.0);
    assert_eq!(interpolate(500.0, (0.0, 100.0), (92.0, 64.0)), 64.0);
}

#[test]
fn interpolate_degenerate_inputs_return_start() {
    assert_eq!(interpolate(10.0, (5.0, 5.0), (1.0, 2.0)), 1.0);
    assert_eq!(interpolate(f64::NAN, (0.0, 1.0), (3.0, 4.0)), 3.0);
}

#[test]
fn header_scrolled_after_threshold() {
    assert!(!header_is_scrolled(0.0));
    assert!(!header_is_scrolled(10.0));
    assert!(header_is_scrolled(10.5));
}

#[test]
fn header_shrinks_over_first_hundred_pixels() {
    assert_eq!(header_height(0.0), 92.0);
    assert_eq!(header_height(25.0), 85.0);
    assert_eq!(header_height(100.0), 64.0);
    assert_eq!(header_height(1000.0), 64.0);
}

#[test]
fn header_border_fades_in_over_fifty_pixels() {
    assert_eq!(header_border_opacity(0.0), 0.0);
    assert_eq!(header_border_opacity(25.0), 0.5);
    assert_eq!(header_border_opacity(80.0), 1.0);
}

#[test]
fn scroll_progress_is_fraction_of_scrollable_height() {
    assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
    assert_eq!(scroll_progress(1500.0, 2000.0, 1000.0), 1.0);
}

#[test]
fn scroll_progress_short_page_is_zero() {
    assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn indicator_hidden_near_top() {
    assert!(!indicator_visible(0.0));
    assert!(!indicator_visible(0.02));
    assert!(indicator_visible(0.05));
}

#[test]
fn metrics_progress_delegates() {
    let metrics = ScrollMetrics { scroll_y: 250.0, document_height: 1500.0, viewport_height: 500.0 };
    assert_eq!(metrics.progress(), 0.25);
}

#[test]
fn anchor_target_leaves_header_room() {
    assert_eq!(anchor_scroll_target(300.0, 1000.0), 1220.0);
    assert_eq!(anchor_scroll_target(20.0, 0.0), 0.0);
}

#[test]
fn fragment_target_requires_non_empty_id() {
    assert_eq!(fragment_target("#contact"), Some("contact"));
    assert_eq!(fragment_target("#"), None);
    assert_eq!(fragment_target("/about"), None);
    assert_eq!(fragment_target("https://example.com/#x"), None);
}
