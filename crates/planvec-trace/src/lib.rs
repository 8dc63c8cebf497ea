//! Raster-to-vector wall extraction.
//!
//! The pipeline turns an RGBA floor-plan raster into axis-aligned wall
//! segments in four stages:
//!
//! 1. [`binarize`] — luminance threshold into a foreground/background
//!    [`planvec_core::Bitmap`].
//! 2. [`scan_bitmap`] — row-wise and column-wise scans over sampled lines,
//!    emitting maximal foreground runs longer than `min_line_length`.
//! 3. [`filter_duplicates`] — drop exact-overlap collinear duplicates that
//!    the two independent scan passes produce.
//! 4. [`merge_segments`] — greedily fuse collinear, endpoint-adjacent
//!    segments until a full pass merges nothing.
//!
//! [`trace_walls`] runs the whole chain. Each invocation is stateless and
//! synchronous; interactive hosts should dispatch the call off their
//! interaction thread as one unit of work.

mod dedup;
mod error;
mod merge;
mod params;
mod pipeline;
mod scan;
mod threshold;

pub use dedup::filter_duplicates;
pub use error::TraceError;
pub use merge::merge_segments;
pub use params::TraceParams;
pub use pipeline::trace_walls;
pub use scan::scan_bitmap;
pub use threshold::binarize;
