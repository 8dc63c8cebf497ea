use serde::{Deserialize, Serialize};

/// Configuration for the wall extraction pipeline.
///
/// Defaults are tuned for dark strokes on a light background at typical
/// interactive-editor image sizes; callers are expected to override for
/// faint scans or unusually thick strokes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TraceParams {
    /// Luminance threshold: a pixel is foreground iff `L < threshold` with
    /// `L = 0.299 R + 0.587 G + 0.114 B`.
    pub threshold: u8,
    /// A run is emitted only if it covers strictly more pixels than this.
    pub min_line_length: u32,
    /// Stride between sampled rows/columns. Strides larger than a stroke's
    /// thickness will miss thin walls; accepted trade-off for speed.
    pub scan_gap: u32,
    /// Cross-axis distance under which two overlapping same-orientation
    /// segments count as duplicates.
    pub duplicate_tolerance: f32,
    /// Cross-axis and endpoint-gap distance under which collinear segments
    /// are fused by the merger.
    pub merge_tolerance: f32,
    /// Endpoint-delta tolerance for classifying a segment as horizontal.
    pub orientation_tolerance: f32,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            threshold: 200,
            min_line_length: 15,
            scan_gap: 5,
            duplicate_tolerance: 5.0,
            merge_tolerance: 10.0,
            orientation_tolerance: 5.0,
        }
    }
}
