//! End-to-end helpers from decoded images (feature `image`).

use crate::core::{RgbaView, Segment};
use crate::trace::{trace_walls, TraceError, TraceParams};

/// Convert an `image::RgbaImage` into the lightweight `planvec-core` view.
pub fn rgba_view(img: &::image::RgbaImage) -> RgbaView<'_> {
    RgbaView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Run the extraction pipeline on a decoded RGBA image.
pub fn trace_walls_image(
    img: &::image::RgbaImage,
    params: &TraceParams,
) -> Result<Vec<Segment>, TraceError> {
    trace_walls(&rgba_view(img), params)
}

/// Run the extraction pipeline on a raw RGBA buffer.
///
/// `data` must hold `width * height * 4` bytes, row-major, origin top-left;
/// the pipeline validates this before any scanning.
pub fn trace_walls_rgba(
    width: usize,
    height: usize,
    data: &[u8],
    params: &TraceParams,
) -> Result<Vec<Segment>, TraceError> {
    let view = RgbaView {
        width,
        height,
        data,
    };
    trace_walls(&view, params)
}
