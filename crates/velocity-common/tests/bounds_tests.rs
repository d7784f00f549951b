//! Comprehensive tests for GeoBounds span wrapping.
//!
//! The wrapped spans are the defensive layer between whatever edge ordering
//! a host map widget reports and the drawing code, so they get exercised
//! against adversarial orderings here.

use velocity_common::GeoBounds;

// ============================================================================
// Ordinary viewports
// ============================================================================

#[test]
fn test_world_view_spans() {
    let b = GeoBounds::new(85.0, -85.0, 180.0, -180.0);
    assert_eq!(b.lon_span(), 360.0);
    assert_eq!(b.lon_span_wrapped(), 0.0); // full circle wraps to 0
    assert_eq!(b.lat_span_wrapped(), 170.0);
}

#[test]
fn test_conus_view_spans() {
    let b = GeoBounds::new(50.0, 24.0, -66.0, -125.0);
    assert_eq!(b.lon_span_wrapped(), 59.0);
    assert_eq!(b.lat_span_wrapped(), 26.0);
}

#[test]
fn test_southern_hemisphere_view() {
    let b = GeoBounds::new(-10.0, -55.0, 155.0, 110.0);
    assert_eq!(b.lon_span_wrapped(), 45.0);
    assert_eq!(b.lat_span_wrapped(), 45.0);
}

// ============================================================================
// Wrap invariants under adversarial orderings
// ============================================================================

#[test]
fn test_lon_wrap_dateline_crossing() {
    let b = GeoBounds::new(40.0, 20.0, -170.0, 170.0);
    let w = b.lon_span_wrapped();
    assert!((0.0..360.0).contains(&w), "out of range: {}", w);
    assert_eq!(w, 20.0);
}

#[test]
fn test_lat_wrap_swapped_edges() {
    let b = GeoBounds::new(-30.0, 10.0, 10.0, 0.0);
    let h = b.lat_span_wrapped();
    assert!((0.0..180.0).contains(&h), "out of range: {}", h);
    assert_eq!(h, 140.0);
}

#[test]
fn test_wrap_ranges_on_sign_grid() {
    // Every combination of edge signs and orderings must land in range.
    let edges = [-350.0, -180.0, -90.0, -1.0, 0.0, 1.0, 90.0, 180.0, 350.0];
    for &north in &edges {
        for &south in &edges {
            let b = GeoBounds::new(north, south, 0.0, 0.0);
            let h = b.lat_span_wrapped();
            assert!(
                (0.0..180.0).contains(&h),
                "lat wrap out of range for N{} S{}: {}",
                north,
                south,
                h
            );
        }
    }
    for &east in &edges {
        for &west in &edges {
            let b = GeoBounds::new(0.0, 0.0, east, west);
            let w = b.lon_span_wrapped();
            assert!(
                (0.0..360.0).contains(&w),
                "lon wrap out of range for E{} W{}: {}",
                east,
                west,
                w
            );
        }
    }
}

#[test]
fn test_wrap_far_out_of_range_inputs() {
    // Inputs the modulo alone would mishandle: the wrap must stay
    // non-negative even when the raw sum goes negative.
    let b = GeoBounds::new(-300.0, 200.0, -500.0, 400.0);
    assert!((0.0..180.0).contains(&b.lat_span_wrapped()));
    assert!((0.0..360.0).contains(&b.lon_span_wrapped()));
}
