//! Scanline run detection.

use planvec_core::{Bitmap, Segment};

use crate::TraceParams;

/// Detect raw axis-aligned segments from a binarized bitmap.
///
/// Two independent passes: sampled rows scanned left to right, then sampled
/// columns scanned top to bottom, each emitting maximal foreground runs
/// covering strictly more than `min_line_length` pixels. A run still open at
/// the image boundary is emitted with the boundary index as its endpoint.
///
/// All horizontal results precede all vertical results, each in scan order.
/// Later stages rely on that ordering only for deterministic tie-breaking in
/// the greedy merge, never for correctness.
pub fn scan_bitmap(bitmap: &Bitmap, params: &TraceParams) -> Vec<Segment> {
    let gap = params.scan_gap.max(1) as usize;
    let min_len = params.min_line_length as usize;
    let (w, h) = (bitmap.width(), bitmap.height());

    let mut segments = Vec::new();

    for y in (0..h).step_by(gap) {
        let mut run_start: Option<usize> = None;
        let mut run_len = 0usize;

        for x in 0..w {
            if bitmap.is_foreground(x, y) {
                if run_start.is_none() {
                    run_start = Some(x);
                }
                run_len += 1;
            } else if let Some(start) = run_start.take() {
                if run_len > min_len {
                    // Run ended at the last foreground pixel, x - 1.
                    segments.push(Segment::new(
                        start as f32,
                        y as f32,
                        (x - 1) as f32,
                        y as f32,
                    ));
                }
                run_len = 0;
            }
        }

        if let Some(start) = run_start {
            if run_len > min_len {
                segments.push(Segment::new(
                    start as f32,
                    y as f32,
                    (w - 1) as f32,
                    y as f32,
                ));
            }
        }
    }

    for x in (0..w).step_by(gap) {
        let mut run_start: Option<usize> = None;
        let mut run_len = 0usize;

        for y in 0..h {
            if bitmap.is_foreground(x, y) {
                if run_start.is_none() {
                    run_start = Some(y);
                }
                run_len += 1;
            } else if let Some(start) = run_start.take() {
                if run_len > min_len {
                    segments.push(Segment::new(
                        x as f32,
                        start as f32,
                        x as f32,
                        (y - 1) as f32,
                    ));
                }
                run_len = 0;
            }
        }

        if let Some(start) = run_start {
            if run_len > min_len {
                segments.push(Segment::new(
                    x as f32,
                    start as f32,
                    x as f32,
                    (h - 1) as f32,
                ));
            }
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use planvec_core::Bitmap;

    fn bitmap_with_pixels(w: usize, h: usize, pixels: &[(usize, usize)]) -> Bitmap {
        let mut mask = vec![false; w * h];
        for &(x, y) in pixels {
            mask[y * w + x] = true;
        }
        Bitmap::from_mask(w, h, mask)
    }

    fn hrun(y: usize, x0: usize, x1: usize) -> Vec<(usize, usize)> {
        (x0..=x1).map(|x| (x, y)).collect()
    }

    #[test]
    fn empty_bitmap_yields_no_segments() {
        let bm = bitmap_with_pixels(100, 100, &[]);
        assert!(scan_bitmap(&bm, &TraceParams::default()).is_empty());
    }

    #[test]
    fn horizontal_run_ends_at_last_foreground_pixel() {
        // Ink on row 50 covering x in [10, 79]; x = 80 is background.
        let bm = bitmap_with_pixels(100, 100, &hrun(50, 10, 79));
        let params = TraceParams::default();
        let segs = scan_bitmap(&bm, &params);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0], Segment::new(10.0, 50.0, 79.0, 50.0));
    }

    #[test]
    fn run_touching_right_edge_uses_boundary_index() {
        let bm = bitmap_with_pixels(100, 100, &hrun(50, 60, 99));
        let segs = scan_bitmap(&bm, &TraceParams::default());
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0], Segment::new(60.0, 50.0, 99.0, 50.0));
    }

    #[test]
    fn run_touching_bottom_edge_uses_boundary_index() {
        let pixels: Vec<_> = (70..100).map(|y| (20usize, y)).collect();
        let bm = bitmap_with_pixels(100, 100, &pixels);
        let segs = scan_bitmap(&bm, &TraceParams::default());
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0], Segment::new(20.0, 70.0, 20.0, 99.0));
    }

    #[test]
    fn minimum_length_is_strict_on_pixel_count() {
        let params = TraceParams::default();
        // Exactly min_line_length pixels: dropped.
        let short = bitmap_with_pixels(100, 100, &hrun(0, 10, 24));
        assert!(scan_bitmap(&short, &params).is_empty());
        // One more pixel: emitted.
        let long = bitmap_with_pixels(100, 100, &hrun(0, 10, 25));
        assert_eq!(scan_bitmap(&long, &params).len(), 1);
    }

    #[test]
    fn rows_off_the_sampling_stride_are_skipped() {
        // Row 3 is never sampled with the default gap of 5.
        let bm = bitmap_with_pixels(100, 100, &hrun(3, 0, 99));
        assert!(scan_bitmap(&bm, &TraceParams::default()).is_empty());
    }

    #[test]
    fn horizontal_results_precede_vertical_results() {
        let mut pixels = hrun(10, 0, 40);
        pixels.extend((50..90).map(|y| (5usize, y)));
        let bm = bitmap_with_pixels(100, 100, &pixels);
        let params = TraceParams::default();
        let segs = scan_bitmap(&bm, &params);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].y1, segs[0].y2);
        assert_eq!(segs[1].x1, segs[1].x2);
    }

    #[test]
    fn two_runs_on_one_row_emit_two_segments() {
        let mut pixels = hrun(0, 0, 30);
        pixels.extend(hrun(0, 50, 80));
        let bm = bitmap_with_pixels(100, 100, &pixels);
        let segs = scan_bitmap(&bm, &TraceParams::default());
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0], Segment::new(0.0, 0.0, 30.0, 0.0));
        assert_eq!(segs[1], Segment::new(50.0, 0.0, 80.0, 0.0));
    }
}
