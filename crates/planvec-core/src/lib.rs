//! Core types and utilities for floor-plan wall extraction.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete image-decoding crate; callers hand it borrowed
//! RGBA buffers and get plain segment/bitmap types back.

mod geometry;
mod logger;
mod raster;
mod segment;

pub use geometry::{angle_toward_nearest, nearest_segment, point_segment_distance, segment_angle};
pub use raster::{Bitmap, RgbaView};
pub use segment::{Orientation, Segment};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
