use log::debug;
use planvec_core::{RgbaView, Segment};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{binarize, filter_duplicates, merge_segments, scan_bitmap, TraceError, TraceParams};

/// Run the full extraction pipeline on an RGBA raster.
///
/// Validates dimensions and buffer length up front, then thresholds, scans,
/// deduplicates, and merges. The returned list fully describes the walls
/// found in the image; callers replacing a previous extraction must replace
/// their stored walls wholesale, never append alongside stale ones.
///
/// The call is pure and synchronous with no internal retries: identical
/// input and parameters always produce the identical segment list.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(src, params), fields(width = src.width, height = src.height))
)]
pub fn trace_walls(src: &RgbaView<'_>, params: &TraceParams) -> Result<Vec<Segment>, TraceError> {
    if src.width == 0 || src.height == 0 {
        return Err(TraceError::EmptyImage {
            width: src.width,
            height: src.height,
        });
    }
    let expected = src.expected_len();
    if src.data.len() != expected {
        return Err(TraceError::InvalidBufferLength {
            expected,
            got: src.data.len(),
        });
    }

    let bitmap = binarize(src, params.threshold);
    debug!(
        "binarized {}x{}: {} foreground pixels",
        src.width,
        src.height,
        bitmap.foreground_count()
    );

    let raw = scan_bitmap(&bitmap, params);
    debug!("scanline detection: {} raw segments", raw.len());

    let deduped = filter_duplicates(raw, params);
    debug!("duplicate filter: {} segments kept", deduped.len());

    let walls = merge_segments(deduped, params);
    debug!("merge fixpoint: {} wall segments", walls.len());

    Ok(walls)
}
