//! Rectify a photographed ruled sheet into a canonical square.
//!
//! Input is the list of straight line segments an external line detector
//! found on the sheet, plus the grayscale source image. The pipeline:
//! 1. Cluster segments that cross each other and keep the largest cluster.
//! 2. Take the convex hull of that cluster's endpoints.
//! 3. Pick the four hull vertices extremal along the diagonals as corners.
//! 4. Fit the homography from the canonical square onto those corners.
//! 5. Resample the source into an `output_size × output_size` image.
//!
//! ## Quickstart
//!
//! ```
//! use sheet_rectify::{LineSegment, RectifyParams, Rectifier};
//! use sheet_rectify::core::GrayImage;
//!
//! let image = GrayImage::filled(100, 100, 128);
//! let segments = [
//!     LineSegment::from_coords(0.0, 0.0, 100.0, 100.0),
//!     LineSegment::from_coords(0.0, 100.0, 100.0, 0.0),
//! ];
//!
//! let rectifier = Rectifier::new(RectifyParams::default().with_output_size(100));
//! let result = rectifier.rectify(&image.view(), &segments).unwrap();
//! assert_eq!(result.rectified.width, 100);
//! ```
//!
//! Every failure is a typed [`RectifyError`]; nothing is retried or
//! swallowed. [`BatchReport`] collects per-image outcomes for callers that
//! process many images.

mod cluster;
mod corners;
mod error;
mod hull;
mod io;
mod params;
mod pipeline;
mod result;
mod trace;
mod transform;

#[cfg(feature = "image")]
pub mod convert;
#[cfg(feature = "image")]
pub mod morphology;

pub use sheet_rectify_core as core;
pub use sheet_rectify_core::{GrayImage, GrayImageView, Interpolation, LineSegment};

pub use cluster::{cluster_segments, dominant_cluster, select_dominant, SegmentCluster};
pub use corners::{select_corners, validate_quadrilateral, CornerRole, Quadrilateral};
pub use error::{QuadDefect, RectifyError, RectifyErrorKind};
pub use hull::{convex_hull, ConvexHull};
pub use io::{BatchReport, ItemOutcome, ItemReport, RectifyConfig, RectifyIoError};
pub use params::{QuadValidationParams, RectifyParams};
pub use pipeline::Rectifier;
pub use result::{RectifyResult, SheetGeometry};
pub use trace::{NoTrace, StageTrace, TraceRecorder, STAGE_ORIGINAL, STAGE_RESULT};
pub use transform::{canonical_square, estimate_transform, warp_to_canonical, CanonicalTransform};
