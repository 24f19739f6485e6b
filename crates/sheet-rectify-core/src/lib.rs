//! Core types and utilities for sheet rectification.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete line detector or image decoding crate.

mod homography;
mod image;
mod logger;
mod segment;
mod warp;

pub use homography::{homography_from_4pt, Homography};
pub use image::{sample_bilinear, sample_nearest, GrayImage, GrayImageView};
pub use segment::{ccw, LineSegment};
pub use warp::{warp_perspective_gray, Interpolation, WarpParams};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
