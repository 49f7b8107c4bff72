use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// frame
// =============================================================

#[test]
fn default_frame_plot_area() {
    let frame = ChartFrame::DEFAULT;
    assert_eq!(frame.plot_width(), 344.0);
    assert_eq!(frame.plot_height(), 252.0);
    assert_eq!(frame.baseline(), 268.0);
}

#[test]
fn x_positions_are_band_centers() {
    let frame = ChartFrame::DEFAULT;
    assert_eq!(frame.x_for(0, 4), 83.0);
    assert_eq!(frame.x_for(3, 4), 341.0);
}

#[test]
fn y_maps_and_clamps() {
    let frame = ChartFrame::DEFAULT;
    assert_eq!(frame.y_for(0.0, 100.0), 268.0);
    assert_eq!(frame.y_for(50.0, 100.0), 142.0);
    assert_eq!(frame.y_for(100.0, 100.0), 16.0);
    assert_eq!(frame.y_for(150.0, 100.0), 16.0);
    assert_eq!(frame.y_for(-5.0, 100.0), 268.0);
    assert_eq!(frame.y_for(5.0, 0.0), 268.0);
}

// =============================================================
// axes
// =============================================================

#[test]
fn nice_ceiling_rounds_up_to_friendly_values() {
    assert_eq!(nice_ceiling(78.0), 100.0);
    assert_eq!(nice_ceiling(3.0), 5.0);
    assert_eq!(nice_ceiling(15.0), 20.0);
    assert_eq!(nice_ceiling(0.0), 1.0);
    assert_eq!(nice_ceiling(f64::NAN), 1.0);
}

#[test]
fn ticks_are_evenly_spaced() {
    assert_eq!(ticks(100.0, 4), [0.0, 25.0, 50.0, 75.0, 100.0]);
    assert_eq!(ticks(100.0, 0), [0.0]);
}

// =============================================================
// paths
// =============================================================

#[test]
fn polyline_points_for_two_values() {
    let frame = ChartFrame::DEFAULT;
    assert_eq!(polyline_points(&frame, &[0.0, 100.0], 100.0), "126,268 298,16");
    assert_eq!(polyline_points(&frame, &[], 100.0), "");
}

#[test]
fn area_path_closes_on_baseline() {
    let frame = ChartFrame::DEFAULT;
    assert_eq!(area_path(&frame, &[0.0, 100.0], 100.0), "M126,268 L126,268 L298,16 L298,268 Z");
    assert_eq!(area_path(&frame, &[], 100.0), "");
}

#[test]
fn grouped_bars_share_a_band() {
    let frame = ChartFrame::DEFAULT;
    let first = bar_rect(&frame, 0, 4, 0, 2, 50.0, 100.0);
    let second = bar_rect(&frame, 0, 4, 1, 2, 50.0, 100.0);
    assert!(close(first.width, 34.4));
    assert!(close(second.x - first.x, first.width));
    assert!(close(first.x, 48.6));
    assert_eq!(first.y, 142.0);
    assert_eq!(first.height, 126.0);
}

#[test]
fn zero_bar_has_no_height() {
    let rect = bar_rect(&ChartFrame::DEFAULT, 2, 4, 0, 2, 0.0, 3.0);
    assert_eq!(rect.height, 0.0);
}

// =============================================================
// donut
// =============================================================

#[test]
fn donut_segments_split_proportionally_with_padding() {
    let segments = donut_segments(&[12.0, 8.0, 5.0], 5.0);
    assert_eq!(segments.len(), 3);
    assert!(close(segments[0].start_deg, 0.0));
    assert!(close(segments[0].end_deg, 165.6));
    assert!(close(segments[1].start_deg, 170.6));
    assert!(close(segments[1].end_deg, 281.0));
    assert!(close(segments[2].start_deg, 286.0));
    assert!(close(segments[2].end_deg, 355.0));
}

#[test]
fn single_segment_takes_full_circle() {
    let segments = donut_segments(&[4.0], 5.0);
    assert!(close(segments[0].end_deg, 360.0));
}

#[test]
fn zero_total_has_no_segments() {
    assert!(donut_segments(&[0.0, 0.0], 5.0).is_empty());
    assert!(donut_segments(&[], 5.0).is_empty());
}

#[test]
fn quarter_arc_path() {
    let d = arc_path(100.0, 100.0, 60.0, 100.0, DonutSegment { start_deg: 0.0, end_deg: 90.0 });
    assert_eq!(d, "M100,0 A100,100 0 0 1 200,100 L160,100 A60,60 0 0 0 100,40 Z");
}

#[test]
fn large_arc_flag_past_half_turn() {
    let d = arc_path(100.0, 100.0, 60.0, 100.0, DonutSegment { start_deg: 0.0, end_deg: 270.0 });
    assert!(d.contains(" 0 1 1 "));
}

#[test]
fn full_turn_still_draws() {
    let d = arc_path(100.0, 100.0, 60.0, 100.0, DonutSegment { start_deg: 0.0, end_deg: 360.0 });
    assert!(d.starts_with("M100,0 A100,100 0 1 1 99.98,0"));
}

#[test]
fn fmt_trims_zeros() {
    assert_eq!(fmt(126.0), "126");
    assert_eq!(fmt(48.6), "48.6");
    assert_eq!(fmt(-0.0001), "0");
    assert_eq!(fmt(1.234), "1.23");
}
