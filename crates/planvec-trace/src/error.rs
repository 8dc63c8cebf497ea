/// Errors returned by the extraction pipeline.
///
/// All variants are detected before any scanning begins; an `Err` therefore
/// implies no partial segment list was produced. Extraction is deterministic
/// for identical input and parameters, so retrying unchanged input is
/// pointless — adjust the threshold or supply a different image instead.
#[derive(thiserror::Error, Debug)]
pub enum TraceError {
    #[error("empty raster (width={width}, height={height})")]
    EmptyImage { width: usize, height: usize },

    #[error("invalid RGBA buffer length (expected {expected} bytes, got {got})")]
    InvalidBufferLength { expected: usize, got: usize },
}
