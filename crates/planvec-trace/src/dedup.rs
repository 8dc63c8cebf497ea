//! Exact-overlap duplicate removal.

use planvec_core::Segment;

use crate::TraceParams;

/// Drop collinear duplicates produced by the independent row/column scans.
///
/// Segments are processed in their given order against the already-kept
/// list. Two same-orientation segments are duplicates iff their cross-axis
/// coordinates differ by less than `duplicate_tolerance` AND their
/// along-axis intervals truly overlap (`min(end1, end2) > max(start1,
/// start2)`). The first-seen segment wins; later duplicates are discarded,
/// not merged.
///
/// Near-parallel segments from adjacent scan rows whose intervals do not
/// overlap are deliberately left alone; only true interval overlap triggers
/// removal. Fusing endpoint-adjacent segments is the merger's job.
pub fn filter_duplicates(segments: Vec<Segment>, params: &TraceParams) -> Vec<Segment> {
    let mut kept: Vec<Segment> = Vec::with_capacity(segments.len());

    for candidate in segments {
        let orientation = candidate.orientation(params.orientation_tolerance);
        let cross = candidate.cross_axis(orientation);
        let (start, end) = candidate.along_interval(orientation);

        let duplicate = kept.iter().any(|existing| {
            if existing.orientation(params.orientation_tolerance) != orientation {
                return false;
            }
            if (cross - existing.cross_axis(orientation)).abs() >= params.duplicate_tolerance {
                return false;
            }
            let (es, ee) = existing.along_interval(orientation);
            end.min(ee) > start.max(es)
        });

        if !duplicate {
            kept.push(candidate);
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_parallel_segments_keep_first_seen() {
        let params = TraceParams::default();
        let segs = vec![
            Segment::new(10.0, 50.0, 80.0, 50.0),
            Segment::new(20.0, 52.0, 70.0, 52.0),
        ];
        let kept = filter_duplicates(segs, &params);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0], Segment::new(10.0, 50.0, 80.0, 50.0));
    }

    #[test]
    fn distant_parallel_segments_are_both_kept() {
        let params = TraceParams::default();
        let segs = vec![
            Segment::new(10.0, 50.0, 80.0, 50.0),
            Segment::new(10.0, 60.0, 80.0, 60.0),
        ];
        assert_eq!(filter_duplicates(segs, &params).len(), 2);
    }

    #[test]
    fn adjacent_row_non_overlapping_segments_are_untouched() {
        // Same scan neighborhood but disjoint intervals: not duplicates.
        let params = TraceParams::default();
        let segs = vec![
            Segment::new(10.0, 50.0, 40.0, 50.0),
            Segment::new(45.0, 52.0, 80.0, 52.0),
        ];
        assert_eq!(filter_duplicates(segs, &params).len(), 2);
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        // min(end) == max(start): strict comparison keeps both.
        let params = TraceParams::default();
        let segs = vec![
            Segment::new(10.0, 50.0, 40.0, 50.0),
            Segment::new(40.0, 52.0, 80.0, 52.0),
        ];
        assert_eq!(filter_duplicates(segs, &params).len(), 2);
    }

    #[test]
    fn differing_orientations_never_conflict() {
        let params = TraceParams::default();
        let segs = vec![
            Segment::new(50.0, 0.0, 50.0, 100.0),
            Segment::new(0.0, 50.0, 100.0, 50.0),
        ];
        assert_eq!(filter_duplicates(segs, &params).len(), 2);
    }

    #[test]
    fn vertical_duplicates_compare_on_x() {
        let params = TraceParams::default();
        let segs = vec![
            Segment::new(30.0, 10.0, 30.0, 90.0),
            Segment::new(33.0, 20.0, 33.0, 70.0),
            Segment::new(36.0, 20.0, 36.0, 70.0),
        ];
        let kept = filter_duplicates(segs, &params);
        // 33 collides with 30; 36 survives against 30 (delta 6 >= 5).
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].x1, 30.0);
        assert_eq!(kept[1].x1, 36.0);
    }
}
