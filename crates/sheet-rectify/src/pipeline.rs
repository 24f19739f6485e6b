//! End-to-end rectification.
//!
//! segments -> dominant cluster -> convex hull -> corners -> homography ->
//! resampled square. Each stage returns its output by value; the only
//! side channel is the optional [`TraceRecorder`].

use crate::cluster::dominant_cluster;
use crate::corners::{select_corners, validate_quadrilateral};
use crate::hull::convex_hull;
use crate::trace::{NoTrace, TraceRecorder, STAGE_ORIGINAL, STAGE_RESULT};
use crate::transform::{estimate_transform, warp_to_canonical};
use crate::{RectifyError, RectifyParams, RectifyResult, SheetGeometry};
use log::debug;
use sheet_rectify_core::{GrayImageView, LineSegment};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Rectifies a sheet given the line segments found on it.
#[derive(Clone, Debug, Default)]
pub struct Rectifier {
    params: RectifyParams,
}

impl Rectifier {
    pub fn new(params: RectifyParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &RectifyParams {
        &self.params
    }

    /// Locate the sheet quadrilateral without touching any pixels.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, segments), fields(segments = segments.len()))
    )]
    pub fn locate(&self, segments: &[LineSegment]) -> Result<SheetGeometry, RectifyError> {
        let cluster = dominant_cluster(segments)?;
        let hull = convex_hull(&cluster.endpoints())?;
        let quad = select_corners(&hull.vertices).ok_or(RectifyError::InsufficientPoints {
            distinct: hull.len(),
        })?;
        debug!(
            "hull has {} vertices; corners tl={:?} bl={:?} br={:?} tr={:?}",
            hull.len(),
            quad.top_left,
            quad.bottom_left,
            quad.bottom_right,
            quad.top_right
        );

        if let Some(validation) = &self.params.validation {
            validate_quadrilateral(&quad, validation)?;
        }

        Ok(SheetGeometry {
            cluster,
            hull,
            quad,
        })
    }

    /// Locate the sheet and resample `image` into the canonical square.
    pub fn rectify(
        &self,
        image: &GrayImageView<'_>,
        segments: &[LineSegment],
    ) -> Result<RectifyResult, RectifyError> {
        self.rectify_with_trace(image, segments, &mut NoTrace)
    }

    /// Same as [`Rectifier::rectify`], reporting images to `trace`.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "info",
            skip(self, image, segments, trace),
            fields(
                width = image.width,
                height = image.height,
                segments = segments.len(),
                output_size = self.params.output_size
            )
        )
    )]
    pub fn rectify_with_trace(
        &self,
        image: &GrayImageView<'_>,
        segments: &[LineSegment],
        trace: &mut dyn TraceRecorder,
    ) -> Result<RectifyResult, RectifyError> {
        if !image.is_consistent() {
            return Err(RectifyError::InvalidImage {
                expected: image.width.saturating_mul(image.height),
                got: image.data.len(),
            });
        }
        let size = self.params.output_size;
        if size == 0 || size.checked_mul(size).is_none() {
            return Err(RectifyError::InvalidOutputSize);
        }
        trace.record(STAGE_ORIGINAL, image);

        let geometry = self.locate(segments)?;
        let transform = estimate_transform(&geometry.quad, self.params.output_size)?;
        let rectified = warp_to_canonical(image, &transform, &self.params);
        trace.record(STAGE_RESULT, &rectified.view());

        Ok(RectifyResult {
            geometry,
            transform,
            rectified,
        })
    }
}
