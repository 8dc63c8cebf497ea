//! Shared geometric primitives.
//!
//! Used by the extraction pipeline's consumers for cursor hit-testing
//! (typically 10 px for walls, 15 px for point-like elements) and for
//! orienting point-like elements toward their nearest wall (30 px radius).

use nalgebra::Point2;

use crate::Segment;

/// Distance from `p` to the closed segment `a`-`b`.
///
/// Projects `p` onto the infinite line, clamps the projection parameter to
/// [0, 1], then returns the Euclidean distance to the clamped point. A
/// degenerate segment (`a == b`) falls back to point distance.
pub fn point_segment_distance(p: Point2<f32>, a: Point2<f32>, b: Point2<f32>) -> f32 {
    let d = b - a;
    let len_sq = d.norm_squared();
    let t = if len_sq > 0.0 {
        ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (p - (a + d * t)).norm()
}

/// Direction of `a`->`b` in radians, via `atan2(dy, dx)`.
pub fn segment_angle(a: Point2<f32>, b: Point2<f32>) -> f32 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Index and distance of the segment closest to `p`, if any.
pub fn nearest_segment(p: Point2<f32>, segments: &[Segment]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, s) in segments.iter().enumerate() {
        let dist = point_segment_distance(p, s.start(), s.end());
        if best.map(|(_, d)| dist < d).unwrap_or(true) {
            best = Some((i, dist));
        }
    }
    best
}

/// Angle of the wall nearest to `p`, or 0.0 when none lies within
/// `max_dist`. Point-like elements use this to align with nearby walls.
pub fn angle_toward_nearest(p: Point2<f32>, segments: &[Segment], max_dist: f32) -> f32 {
    match nearest_segment(p, segments) {
        Some((i, dist)) if dist < max_dist => {
            let s = &segments[i];
            segment_angle(s.start(), s.end())
        }
        _ => 0.0,
    }
}
