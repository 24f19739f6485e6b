use crate::{CanonicalTransform, ConvexHull, Quadrilateral, SegmentCluster};
use sheet_rectify_core::GrayImage;

/// Geometry located from the segments alone.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetGeometry {
    /// Dominant segment cluster.
    pub cluster: SegmentCluster,
    /// Hull of the cluster's endpoints.
    pub hull: ConvexHull,
    /// Extremal hull vertices.
    pub quad: Quadrilateral,
}

/// Output of [`Rectifier::rectify`](crate::Rectifier::rectify).
#[derive(Clone, Debug)]
pub struct RectifyResult {
    pub geometry: SheetGeometry,
    pub transform: CanonicalTransform,
    /// `output_size × output_size` resampled image.
    pub rectified: GrayImage,
}

impl RectifyResult {
    #[inline]
    pub fn quad(&self) -> &Quadrilateral {
        &self.geometry.quad
    }
}
