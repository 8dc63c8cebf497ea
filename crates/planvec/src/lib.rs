//! High-level facade crate for the `planvec-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the extraction pipeline and the shared
//!   geometry primitives
//! - (feature-gated) end-to-end helpers that run the pipeline directly on an
//!   `image::RgbaImage` or a raw RGBA buffer.
//!
//! ## Quickstart
//!
//! ```no_run
//! use planvec::extract;
//! use planvec::TraceParams;
//! use image::ImageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = ImageReader::open("plan.png")?.decode()?.to_rgba8();
//! let walls = extract::trace_walls_image(&img, &TraceParams::default())?;
//! println!("found {} wall segments", walls.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `planvec::core`: raster views, bitmaps, segments, geometry primitives.
//! - `planvec::trace`: the threshold → scan → dedup → merge pipeline.
//! - `planvec::extract` (feature `image`): end-to-end helpers from decoded
//!   images.
//!
//! Extraction replaces, never appends: one call's output fully describes the
//! walls in one image, and callers keeping a wall store must swap it out
//! wholesale on re-extraction.

pub use planvec_core as core;
pub use planvec_trace as trace;

pub use planvec_core::{
    angle_toward_nearest, nearest_segment, point_segment_distance, segment_angle, Orientation,
    Segment,
};
pub use planvec_trace::{TraceError, TraceParams};

#[cfg(feature = "image")]
pub mod extract;
