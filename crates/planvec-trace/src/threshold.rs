//! Luminance thresholding.

use planvec_core::{Bitmap, RgbaView};

/// Binarize an RGBA raster into a foreground/background bitmap.
///
/// Per pixel, luminance is the weighted sum `0.299 R + 0.587 G + 0.114 B`;
/// the pixel is foreground iff `L < threshold`. The source raster is left
/// unmodified. The default threshold of 200 assumes dark strokes on a light
/// background.
pub fn binarize(src: &RgbaView<'_>, threshold: u8) -> Bitmap {
    let t = threshold as f32;
    let mut mask = Vec::with_capacity(src.width * src.height);
    for y in 0..src.height {
        for x in 0..src.width {
            let (r, g, b) = src.rgb(x, y);
            let lum = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
            mask.push(lum < t);
        }
    }
    Bitmap::from_mask(src.width, src.height, mask)
}
