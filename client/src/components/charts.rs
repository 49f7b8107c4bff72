//! SVG charts for the dashboard.
//!
//! ARCHITECTURE
//! ============
//! Geometry lives in `util::chart_math`; these components only map series
//! onto SVG elements. Every chart uses the same [`ChartFrame`] viewBox and
//! scales to its container width.

use leptos::prelude::*;

use crate::analytics::series::{DistributionSlice, SessionPoint, SkillBar, TrendPoint};
use crate::config::palette::chart;
use crate::config::skills::SkillLevel;
use crate::util::chart_math::{
    ChartFrame, DonutSegment, arc_path, area_path, bar_rect, donut_segments, fmt, nice_ceiling, polyline_points,
    ticks,
};

const Y_INTERVALS: usize = 4;
const DONUT_INNER_RADIUS: f64 = 60.0;
const DONUT_OUTER_RADIUS: f64 = 100.0;
const DONUT_PADDING_DEG: f64 = 5.0;

/// Dashed grid lines, y tick labels, and category labels along the x axis.
#[component]
fn Axes(max: f64, labels: Vec<String>) -> impl IntoView {
    let frame = ChartFrame::DEFAULT;
    let count = labels.len();
    let right = frame.width - frame.pad_right;
    let label_y = frame.baseline() + 18.0;

    let grid = ticks(max, Y_INTERVALS)
        .into_iter()
        .map(|tick| {
            let y = frame.y_for(tick, max);
            let label_x = frame.pad_left - 6.0;
            let label_y = y + 4.0;
            view! {
                <line class="chart__grid" x1=frame.pad_left x2=right y1=y y2=y stroke-dasharray="3 3"></line>
                <text class="chart__tick" x=label_x y=label_y text-anchor="end">{fmt(tick)}</text>
            }
        })
        .collect_view();

    let categories = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <text class="chart__tick" x=frame.x_for(i, count) y=label_y text-anchor="middle">
                    {label}
                </text>
            }
        })
        .collect_view();

    view! {
        <g class="chart__axes">
            {grid}
            {categories}
        </g>
    }
}

fn view_box() -> String {
    let frame = ChartFrame::DEFAULT;
    format!("0 0 {} {}", fmt(frame.width), fmt(frame.height))
}

/// Filled area of learning progress over time.
#[component]
pub fn TrendAreaChart(points: Vec<TrendPoint>) -> impl IntoView {
    let frame = ChartFrame::DEFAULT;
    let values: Vec<f64> = points.iter().map(|p| p.progress).collect();
    let max = nice_ceiling(values.iter().copied().fold(0.0, f64::max));
    let labels: Vec<String> = points.into_iter().map(|p| p.label).collect();

    view! {
        <svg class="chart chart--area" viewBox=view_box() role="img" aria-label="Learning progress over time">
            <Axes max=max labels=labels/>
            <path d=area_path(&frame, &values, max) fill=chart::PRIMARY fill-opacity="0.3"></path>
            <polyline
                points=polyline_points(&frame, &values, max)
                fill="none"
                stroke=chart::PRIMARY
                stroke-width="2"
            ></polyline>
        </svg>
    }
}

/// Duration and completion per session as two lines.
#[component]
pub fn SessionLineChart(points: Vec<SessionPoint>) -> impl IntoView {
    let frame = ChartFrame::DEFAULT;
    let durations: Vec<f64> = points.iter().map(|p| p.duration).collect();
    let completions: Vec<f64> = points.iter().map(|p| p.completion).collect();
    let max = nice_ceiling(durations.iter().chain(completions.iter()).copied().fold(0.0, f64::max));
    let labels: Vec<String> = points.into_iter().map(|p| p.label).collect();

    view! {
        <svg class="chart chart--line" viewBox=view_box() role="img" aria-label="Recent learning sessions">
            <Axes max=max labels=labels/>
            <polyline
                points=polyline_points(&frame, &durations, max)
                fill="none"
                stroke=chart::SUCCESS
                stroke-width="2"
            ></polyline>
            <polyline
                points=polyline_points(&frame, &completions, max)
                fill="none"
                stroke=chart::INFO
                stroke-width="2"
            ></polyline>
        </svg>
        <Legend entries=vec![("Duration (min)", chart::SUCCESS), ("Completion %", chart::INFO)]/>
    }
}

/// Current vs target level for each skill.
#[component]
pub fn SkillBarChart(bars: Vec<SkillBar>) -> impl IntoView {
    let frame = ChartFrame::DEFAULT;
    let max = f64::from(SkillLevel::MAX.value());
    let count = bars.len();

    let rects = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let current = bar_rect(&frame, i, count, 0, 2, bar.current, max);
            let target = bar_rect(&frame, i, count, 1, 2, bar.target, max);
            let current_label = format!("{}: current {}", bar.name, bar.current);
            let target_label = format!("{}: target {}", bar.name, bar.target);
            view! {
                <rect
                    x=current.x
                    y=current.y
                    width=current.width
                    height=current.height
                    fill=chart::PRIMARY
                    aria-label=current_label
                ></rect>
                <rect
                    x=target.x
                    y=target.y
                    width=target.width
                    height=target.height
                    fill=chart::SECONDARY
                    aria-label=target_label
                ></rect>
            }
        })
        .collect_view();
    let labels: Vec<String> = bars.into_iter().map(|b| b.name).collect();

    view! {
        <svg class="chart chart--bar" viewBox=view_box() role="img" aria-label="Current skills progress">
            <Axes max=max labels=labels/>
            {rects}
        </svg>
        <Legend entries=vec![("Current Level", chart::PRIMARY), ("Target Level", chart::SECONDARY)]/>
    }
}

/// Mastery buckets as a padded donut.
#[component]
pub fn DistributionDonut(slices: Vec<DistributionSlice>) -> impl IntoView {
    let frame = ChartFrame::DEFAULT;
    let (cx, cy) = (frame.width / 2.0, frame.height / 2.0);
    let values: Vec<f64> = slices.iter().map(|s| f64::from(s.value)).collect();

    let sectors = donut_segments(&values, DONUT_PADDING_DEG)
        .into_iter()
        .zip(slices.iter().copied())
        .map(|(segment, slice): (DonutSegment, DistributionSlice)| {
            let label = format!("{}: {}", slice.name, slice.value);
            view! {
                <path
                    d=arc_path(cx, cy, DONUT_INNER_RADIUS, DONUT_OUTER_RADIUS, segment)
                    fill=slice.color
                    aria-label=label
                ></path>
            }
        })
        .collect_view();
    let legend: Vec<(&'static str, &'static str)> = slices.iter().map(|s| (s.name, s.color)).collect();

    view! {
        <svg class="chart chart--donut" viewBox=view_box() role="img" aria-label="Skill distribution">
            {sectors}
        </svg>
        <Legend entries=legend/>
    }
}

#[component]
fn Legend(entries: Vec<(&'static str, &'static str)>) -> impl IntoView {
    view! {
        <ul class="chart-legend">
            {entries
                .into_iter()
                .map(|(label, color)| {
                    view! {
                        <li class="chart-legend__item">
                            <span class="chart-legend__swatch" style=format!("background-color: {color}")></span>
                            {label}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
