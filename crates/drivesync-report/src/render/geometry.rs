//! Pixel-space helpers for marks plotters has no element for.
use crate::figure::Wedge;

/// Label for the category whose centre is nearest to `x`.
pub fn category_label(labels: &[String], x: f64) -> String {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 1e-6 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

/// Split the segment `from`..`to` into dashes.
///
/// `px_per_unit` converts data units to pixels along each axis, so dash and
/// gap lengths are even on screen regardless of the axis ranges.
pub fn dashed_segments(
    from: (f64, f64),
    to: (f64, f64),
    dash_px: f64,
    gap_px: f64,
    px_per_unit: (f64, f64),
) -> Vec<Vec<(f64, f64)>> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let length_px = (dx * px_per_unit.0).hypot(dy * px_per_unit.1);
    if length_px <= 0.0 || dash_px <= 0.0 {
        return vec![vec![from, to]];
    }

    let at = |px: f64| {
        let t = (px / length_px).min(1.0);
        (from.0 + dx * t, from.1 + dy * t)
    };

    let mut segments = Vec::new();
    let mut start = 0.0;
    while start < length_px {
        let end = (start + dash_px).min(length_px);
        segments.push(vec![at(start), at(end)]);
        start = end + gap_px;
    }
    segments
}

/// Open arrow head at `tip` for a shaft coming from `tail`: the two wing
/// points with the tip between them.
pub fn arrow_head(
    tail: (f64, f64),
    tip: (f64, f64),
    length_px: f64,
    px_per_unit: (f64, f64),
) -> Vec<(f64, f64)> {
    let dx = (tip.0 - tail.0) * px_per_unit.0;
    let dy = (tip.1 - tail.1) * px_per_unit.1;
    let norm = dx.hypot(dy);
    if norm == 0.0 {
        return vec![tip];
    }
    let (bx, by) = (-dx / norm, -dy / norm);
    let wing = |angle: f64| {
        let (sin, cos) = angle.sin_cos();
        let wx = bx * cos - by * sin;
        let wy = bx * sin + by * cos;
        (
            tip.0 + wx * length_px / px_per_unit.0,
            tip.1 + wy * length_px / px_per_unit.1,
        )
    };
    let spread = 25f64.to_radians();
    vec![wing(spread), tip, wing(-spread)]
}

/// Point at `radius` and `angle_deg` from `center`, in screen coordinates
/// (y grows downward).
pub fn polar(center: (f64, f64), radius: f64, angle_deg: f64) -> (i32, i32) {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    (
        (center.0 + radius * cos).round() as i32,
        (center.1 - radius * sin).round() as i32,
    )
}

/// Centre of a wedge after pushing it out along its bisector.
pub fn wedge_center(center: (f64, f64), radius: f64, wedge: &Wedge) -> (f64, f64) {
    let (sin, cos) = wedge.mid_deg().to_radians().sin_cos();
    (
        center.0 + wedge.offset * radius * cos,
        center.1 - wedge.offset * radius * sin,
    )
}

/// Closed outline of a pie wedge, approximated every `step_deg` degrees.
pub fn wedge_polygon(
    center: (f64, f64),
    radius: f64,
    wedge: &Wedge,
    step_deg: f64,
) -> Vec<(i32, i32)> {
    let origin = wedge_center(center, radius, wedge);
    let sweep = wedge.end_deg - wedge.start_deg;
    let steps = (sweep / step_deg).ceil().max(1.0) as usize;

    let mut points = Vec::with_capacity(steps + 2);
    points.push((origin.0.round() as i32, origin.1.round() as i32));
    for k in 0..=steps {
        let angle = wedge.start_deg + sweep * k as f64 / steps as f64;
        points.push(polar(origin, radius, angle));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_label_only_at_centres() {
        let labels = vec!["a".to_string(), "b".to_string()];
        assert_eq!(category_label(&labels, 1.0), "b");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, -1.0), "");
        assert_eq!(category_label(&labels, 2.0), "");
    }

    #[test]
    fn dashes_cover_the_segment_without_overrun() {
        let segments = dashed_segments((0.0, 5.0), (150.0, 5.0), 10.0, 5.0, (1.0, 1.0));
        assert_eq!(segments.len(), 10);
        assert_eq!(segments[0], vec![(0.0, 5.0), (10.0, 5.0)]);
        let last = segments.last().unwrap();
        assert!(last[1].0 <= 150.0);
        assert!(segments.iter().all(|s| s[0].1 == 5.0 && s[1].1 == 5.0));
    }

    #[test]
    fn arrow_wings_are_symmetric_in_pixels() {
        let scale = (10.0, 40.0);
        let head = arrow_head((55.0, 8.0), (40.0, 4.5), 20.0, scale);
        assert_eq!(head.len(), 3);
        assert_eq!(head[1], (40.0, 4.5));
        let dist = |p: (f64, f64)| ((p.0 - 40.0) * scale.0).hypot((p.1 - 4.5) * scale.1);
        assert!((dist(head[0]) - 20.0).abs() < 1e-9);
        assert!((dist(head[2]) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn exploded_wedge_moves_along_its_bisector() {
        let wedge = Wedge {
            start_deg: 0.0,
            end_deg: 180.0,
            offset: 0.1,
            share: 0.5,
        };
        let (x, y) = wedge_center((100.0, 100.0), 50.0, &wedge);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 95.0).abs() < 1e-9);
    }
}
