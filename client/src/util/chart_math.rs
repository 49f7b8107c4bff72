//! Geometry for the dashboard's SVG charts.
//!
//! All charts share a [`ChartFrame`]: a fixed viewBox with padding reserved
//! for axis labels. Categorical x positions are band centers so line, area,
//! and bar charts line up on the same labels. Angles for donut segments are
//! degrees clockwise from twelve o'clock.

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl ChartFrame {
    pub const DEFAULT: ChartFrame =
        ChartFrame { width: 400.0, height: 300.0, pad_left: 40.0, pad_right: 16.0, pad_top: 16.0, pad_bottom: 32.0 };

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        (self.width - self.pad_left - self.pad_right).max(0.0)
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        (self.height - self.pad_top - self.pad_bottom).max(0.0)
    }

    /// Y coordinate of the x axis.
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.pad_top + self.plot_height()
    }

    #[must_use]
    pub fn band_width(&self, count: usize) -> f64 {
        if count == 0 { 0.0 } else { self.plot_width() / count as f64 }
    }

    /// Center of band `index` out of `count`.
    #[must_use]
    pub fn x_for(&self, index: usize, count: usize) -> f64 {
        self.pad_left + self.band_width(count) * (index as f64 + 0.5)
    }

    /// Y for `value` on a `0..=max` axis. Values outside the axis clamp.
    #[must_use]
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 || !value.is_finite() {
            return self.baseline();
        }
        let ratio = (value / max).clamp(0.0, 1.0);
        self.pad_top + self.plot_height() * (1.0 - ratio)
    }
}

/// Round `max` up to 1, 2, 5, or 10 times a power of ten.
#[must_use]
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 5.0, 10.0].into_iter().find(|s| normalized <= *s).unwrap_or(10.0);
    step * magnitude
}

/// `intervals + 1` evenly spaced tick values from 0 to `max`.
#[must_use]
pub fn ticks(max: f64, intervals: usize) -> Vec<f64> {
    if intervals == 0 {
        return vec![0.0];
    }
    (0..=intervals).map(|i| max * i as f64 / intervals as f64).collect()
}

/// `points` attribute for an SVG `<polyline>`.
#[must_use]
pub fn polyline_points(frame: &ChartFrame, values: &[f64], max: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{},{}", fmt(frame.x_for(i, values.len())), fmt(frame.y_for(*v, max))))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed `d` path filling the area between the series and the baseline.
#[must_use]
pub fn area_path(frame: &ChartFrame, values: &[f64], max: f64) -> String {
    let count = values.len();
    if count == 0 {
        return String::new();
    }
    let base = fmt(frame.baseline());
    let mut d = format!("M{},{base}", fmt(frame.x_for(0, count)));
    for (i, v) in values.iter().enumerate() {
        d.push_str(&format!(" L{},{}", fmt(frame.x_for(i, count)), fmt(frame.y_for(*v, max))));
    }
    d.push_str(&format!(" L{},{base} Z", fmt(frame.x_for(count - 1, count))));
    d
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Fraction of each band left empty around a bar group.
const BAR_GROUP_GAP: f64 = 0.2;

/// Rectangle for series `series_index` of `series_count` in band `index`.
#[must_use]
pub fn bar_rect(
    frame: &ChartFrame,
    index: usize,
    count: usize,
    series_index: usize,
    series_count: usize,
    value: f64,
    max: f64,
) -> BarRect {
    let band = frame.band_width(count);
    let group = band * (1.0 - BAR_GROUP_GAP);
    let width = if series_count == 0 { 0.0 } else { group / series_count as f64 };
    let x = frame.pad_left + band * index as f64 + (band - group) / 2.0 + width * series_index as f64;
    let y = frame.y_for(value, max);
    BarRect { x, y, width, height: frame.baseline() - y }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutSegment {
    pub start_deg: f64,
    pub end_deg: f64,
}

/// Split a full circle proportionally to `values`, leaving `padding_deg`
/// after each segment when there is more than one. Returns nothing when the
/// values sum to zero.
#[must_use]
pub fn donut_segments(values: &[f64], padding_deg: f64) -> Vec<DonutSegment> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let padding = if values.len() > 1 { padding_deg.max(0.0) } else { 0.0 };
    let available = (360.0 - padding * values.len() as f64).max(0.0);

    let mut cursor = 0.0;
    values
        .iter()
        .map(|v| {
            let sweep = available * v.max(0.0) / total;
            let segment = DonutSegment { start_deg: cursor, end_deg: cursor + sweep };
            cursor += sweep + padding;
            segment
        })
        .collect()
}

const FULL_TURN_LIMIT_DEG: f64 = 359.99;

fn polar(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (cx + r * rad.sin(), cy - r * rad.cos())
}

/// `d` path for a ring sector between `inner` and `outer` radius.
#[must_use]
pub fn arc_path(cx: f64, cy: f64, inner: f64, outer: f64, segment: DonutSegment) -> String {
    // A full turn has coincident endpoints and would not render as an arc.
    let sweep = (segment.end_deg - segment.start_deg).min(FULL_TURN_LIMIT_DEG);
    let segment = DonutSegment { start_deg: segment.start_deg, end_deg: segment.start_deg + sweep };
    let large = u8::from(sweep > 180.0);
    let (ox0, oy0) = polar(cx, cy, outer, segment.start_deg);
    let (ox1, oy1) = polar(cx, cy, outer, segment.end_deg);
    let (ix1, iy1) = polar(cx, cy, inner, segment.end_deg);
    let (ix0, iy0) = polar(cx, cy, inner, segment.start_deg);
    format!(
        "M{},{} A{},{} 0 {large} 1 {},{} L{},{} A{},{} 0 {large} 0 {},{} Z",
        fmt(ox0),
        fmt(oy0),
        fmt(outer),
        fmt(outer),
        fmt(ox1),
        fmt(oy1),
        fmt(ix1),
        fmt(iy1),
        fmt(inner),
        fmt(inner),
        fmt(ix0),
        fmt(iy0),
    )
}

/// Two-decimal coordinate with trailing zeros dropped.
#[must_use]
pub fn fmt(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}
