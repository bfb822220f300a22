//! Chart Geometry
//!
//! Scales dashboard data into SVG coordinates. Kept free of view code
//! so the math runs in host-side tests.

use std::f64::consts::{PI, TAU};

pub const CHART_COLORS: [&str; 3] = ["#6366f1", "#8b5cf6", "#60a5fa"];

pub fn color_for(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// One bar, bottom-aligned inside a width x height viewbox
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bars share the width evenly; the tallest value fills the full height
pub fn bar_layout(data: &[(String, u32)], width: f64, height: f64) -> Vec<Bar> {
    if data.is_empty() {
        return Vec::new();
    }
    let max = data.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let slot = width / data.len() as f64;
    let bar_width = slot * 0.6;
    data.iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let bar_height = if max == 0 {
                0.0
            } else {
                f64::from(*value) / f64::from(max) * height
            };
            Bar {
                label: label.clone(),
                value: *value,
                x: i as f64 * slot + (slot - bar_width) / 2.0,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

/// One donut segment, already rendered to an SVG path
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub path: String,
    pub color: &'static str,
}

/// Segments start at 12 o'clock and run clockwise. Zero or negative
/// values are dropped; a zero total yields no segments.
pub fn donut_slices(data: &[(String, f64)], cx: f64, cy: f64, outer: f64, inner: f64) -> Vec<Slice> {
    let total: f64 = data.iter().map(|(_, v)| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut slices = Vec::new();
    let mut start = -PI / 2.0;
    for (i, (label, value)) in data.iter().enumerate() {
        if *value <= 0.0 {
            continue;
        }
        let fraction = value / total;
        // A full-circle arc collapses to nothing in SVG, so back off a hair
        let sweep = (fraction * TAU).min(TAU - 1e-4);
        let end = start + sweep;
        slices.push(Slice {
            label: label.clone(),
            value: *value,
            fraction,
            path: ring_segment_path(cx, cy, outer, inner, start, end),
            color: color_for(i),
        });
        start = end;
    }
    slices
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

fn ring_segment_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let large = if end - start > PI { 1 } else { 0 };
    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    let (ix0, iy0) = polar(cx, cy, inner, end);
    let (ix1, iy1) = polar(cx, cy, inner, start);
    format!(
        "M {ox0:.2} {oy0:.2} A {outer:.2} {outer:.2} 0 {large} 1 {ox1:.2} {oy1:.2} \
         L {ix0:.2} {iy0:.2} A {inner:.2} {inner:.2} 0 {large} 0 {ix1:.2} {iy1:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(pairs: &[(&str, u32)]) -> Vec<(String, u32)> {
        pairs.iter().map(|(l, v)| (l.to_string(), *v)).collect()
    }

    #[test]
    fn test_bar_layout_scales_to_max() {
        let bars = bar_layout(&named(&[("Std 1", 10), ("Std 2", 5)]), 200.0, 100.0);

        // Should be: tallest bar fills the height, half value half height,
        // both bottom-aligned
        assert_eq!(bars.len(), 2);
        assert!((bars[0].height - 100.0).abs() < 1e-9);
        assert!((bars[0].y - 0.0).abs() < 1e-9);
        assert!((bars[1].height - 50.0).abs() < 1e-9);
        assert!((bars[1].y - 50.0).abs() < 1e-9);

        // Even slots, second bar to the right of the first
        assert!((bars[0].width - bars[1].width).abs() < 1e-9);
        assert!(bars[1].x > bars[0].x + bars[0].width);
    }

    #[test]
    fn test_bar_layout_all_zero_values() {
        let bars = bar_layout(&named(&[("Std 1", 0), ("Std 2", 0)]), 200.0, 100.0);
        assert_eq!(bars.len(), 2);
        assert!(bars.iter().all(|b| b.height == 0.0 && b.y == 100.0));
    }

    #[test]
    fn test_bar_layout_empty() {
        assert!(bar_layout(&[], 200.0, 100.0).is_empty());
    }

    #[test]
    fn test_donut_fractions_and_colors() {
        let data = vec![("Std 1".to_string(), 60.0), ("Std 2".to_string(), 40.0)];
        let slices = donut_slices(&data, 50.0, 50.0, 40.0, 25.0);

        assert_eq!(slices.len(), 2);
        assert!((slices[0].fraction - 0.6).abs() < 1e-9);
        assert!((slices[1].fraction - 0.4).abs() < 1e-9);
        assert_eq!(slices[0].color, "#6366f1");
        assert_eq!(slices[1].color, "#8b5cf6");
        assert!(slices[0].path.starts_with("M "));
        assert!(slices[0].path.contains(" A "));
        assert!(slices[0].path.ends_with('Z'));
    }

    #[test]
    fn test_donut_single_slice_is_near_full_circle() {
        let data = vec![("Std 3".to_string(), 1200.0)];
        let slices = donut_slices(&data, 50.0, 50.0, 40.0, 25.0);

        assert_eq!(slices.len(), 1);
        assert!((slices[0].fraction - 1.0).abs() < 1e-9);
        // Degenerate full-circle arc must still draw
        assert!(slices[0].path.contains(" 1 1 "));
    }

    #[test]
    fn test_donut_drops_empty_values() {
        let data = vec![
            ("Std 1".to_string(), 0.0),
            ("Std 2".to_string(), 10.0),
            ("Std 3".to_string(), -5.0),
        ];
        let slices = donut_slices(&data, 50.0, 50.0, 40.0, 25.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, "Std 2");

        assert!(donut_slices(&[], 50.0, 50.0, 40.0, 25.0).is_empty());
    }

    #[test]
    fn test_color_cycle_wraps() {
        assert_eq!(color_for(0), color_for(3));
        assert_eq!(color_for(2), "#60a5fa");
    }
}
