//! Greedy fixpoint merging of collinear, endpoint-adjacent segments.

use planvec_core::{Orientation, Segment};

use crate::TraceParams;

/// Fuse collinear segments whose endpoints nearly touch.
///
/// Repeatedly scans all pairs (i, j > i). A pair merges iff both segments
/// share an orientation class, their cross-axis coordinates differ by less
/// than `merge_tolerance`, and one's far endpoint lies within
/// `merge_tolerance` of the other's near endpoint (checked in both
/// directions). On the first hit in scan order, segment i is replaced by the
/// fused span, segment j is removed, and the pairwise scan restarts from the
/// beginning. A complete scan with no merge is the fixpoint.
///
/// The algorithm is greedy and scan-order dependent: when three or more
/// segments could chain at a shared region, the input order decides the
/// outcome. That is intended behavior, and it terminates because every merge
/// strictly shrinks the list. Worst case is cubic in segment count.
pub fn merge_segments(segments: Vec<Segment>, params: &TraceParams) -> Vec<Segment> {
    let mut result = segments;

    let mut changed = true;
    while changed {
        changed = false;

        'scan: for i in 0..result.len() {
            for j in (i + 1)..result.len() {
                if let Some(fused) = try_fuse(&result[i], &result[j], params) {
                    result[i] = fused;
                    result.remove(j);
                    changed = true;
                    break 'scan;
                }
            }
        }
    }

    result
}

fn try_fuse(a: &Segment, b: &Segment, params: &TraceParams) -> Option<Segment> {
    let tol = params.merge_tolerance;
    let orientation = a.orientation(params.orientation_tolerance);
    if b.orientation(params.orientation_tolerance) != orientation {
        return None;
    }

    match orientation {
        Orientation::Horizontal => {
            if (a.y1 - b.y1).abs() >= tol {
                return None;
            }
            if (a.x2 - b.x1).abs() < tol {
                // a's end meets b's start: extend a forward to b's end.
                Some(Segment::new(a.x1, a.y1, b.x2, b.y2))
            } else if (a.x1 - b.x2).abs() < tol {
                // b's end meets a's start: pull a's start back to b's start.
                Some(Segment::new(b.x1, b.y1, a.x2, a.y2))
            } else {
                None
            }
        }
        Orientation::Vertical => {
            if (a.x1 - b.x1).abs() >= tol {
                return None;
            }
            if (a.y2 - b.y1).abs() < tol {
                Some(Segment::new(a.x1, a.y1, b.x2, b.y2))
            } else if (a.y1 - b.y2).abs() < tol {
                Some(Segment::new(b.x1, b.y1, a.x2, a.y2))
            } else {
                None
            }
        }
    }
}
