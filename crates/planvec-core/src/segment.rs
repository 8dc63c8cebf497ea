use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Axis classification of a detected segment.
///
/// The scanline detector only emits axis-aligned-within-tolerance runs, so
/// classification is well-defined for everything the pipeline produces.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A straight wall segment in image-space pixel coordinates (y down).
///
/// Orientation is always recomputed from the endpoints, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Segment {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn start(&self) -> Point2<f32> {
        Point2::new(self.x1, self.y1)
    }

    #[inline]
    pub fn end(&self) -> Point2<f32> {
        Point2::new(self.x2, self.y2)
    }

    /// Classify the segment: `Horizontal` iff `|y2 - y1| < tol`.
    pub fn orientation(&self, tol: f32) -> Orientation {
        if (self.y2 - self.y1).abs() < tol {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Coordinate perpendicular to the segment's axis (y for horizontal
    /// segments, x for vertical ones), taken from the first endpoint.
    pub fn cross_axis(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.y1,
            Orientation::Vertical => self.x1,
        }
    }

    /// Along-axis interval as (min, max).
    pub fn along_interval(&self, orientation: Orientation) -> (f32, f32) {
        let (a, b) = match orientation {
            Orientation::Horizontal => (self.x1, self.x2),
            Orientation::Vertical => (self.y1, self.y2),
        };
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    pub fn length(&self) -> f32 {
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_uses_endpoint_delta() {
        let h = Segment::new(0.0, 10.0, 50.0, 12.0);
        let v = Segment::new(10.0, 0.0, 12.0, 50.0);
        assert_eq!(h.orientation(5.0), Orientation::Horizontal);
        assert_eq!(v.orientation(5.0), Orientation::Vertical);
    }

    #[test]
    fn along_interval_is_normalized() {
        let s = Segment::new(40.0, 0.0, 10.0, 0.0);
        assert_eq!(s.along_interval(Orientation::Horizontal), (10.0, 40.0));
        assert_eq!(s.cross_axis(Orientation::Horizontal), 0.0);
    }

    #[test]
    fn serializes_as_plain_endpoints() {
        let s = Segment::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"x1":1.0,"y1":2.0,"x2":3.0,"y2":4.0}"#);
    }
}
