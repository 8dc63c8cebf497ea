/// Borrowed view over an RGBA8 raster, row-major, origin top-left.
///
/// `data` holds 4 bytes per pixel (R, G, B, A); alpha is carried but ignored
/// by the extraction pipeline.
#[derive(Clone, Copy, Debug)]
pub struct RgbaView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // len = w*h*4
}

impl<'a> RgbaView<'a> {
    /// Bytes expected in `data` for the declared dimensions.
    #[inline]
    pub fn expected_len(&self) -> usize {
        self.width * self.height * 4
    }

    /// RGB channels of the pixel at (x, y). Caller guarantees bounds.
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let i = (y * self.width + x) * 4;
        (self.data[i], self.data[i + 1], self.data[i + 2])
    }
}

/// Binary foreground/background mask, materialized once per extraction call.
///
/// The mask is a flat row-major array so that scanning indexes memory
/// directly instead of re-deriving pixel values on every read.
#[derive(Clone, Debug)]
pub struct Bitmap {
    width: usize,
    height: usize,
    mask: Vec<bool>,
}

impl Bitmap {
    /// Build a bitmap from a prepared mask. `mask.len()` must be `w*h`.
    pub fn from_mask(width: usize, height: usize, mask: Vec<bool>) -> Self {
        debug_assert_eq!(mask.len(), width * height);
        Self {
            width,
            height,
            mask,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True if the pixel at (x, y) is foreground ("ink").
    #[inline]
    pub fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.mask[y * self.width + x]
    }

    /// Number of foreground pixels, used for stage logging.
    pub fn foreground_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }
}
