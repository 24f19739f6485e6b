use crate::{Quadrilateral, RectifyError, RectifyParams};
use log::debug;
use nalgebra::Point2;
use sheet_rectify_core::{
    homography_from_4pt, warp_perspective_gray, GrayImage, GrayImageView, Homography,
};

/// Corners of the `size × size` output square in quadrilateral role order:
/// top-left, bottom-left, bottom-right, top-right.
pub fn canonical_square(size: f64) -> [Point2<f64>; 4] {
    [
        Point2::new(0.0, 0.0),
        Point2::new(0.0, size),
        Point2::new(size, size),
        Point2::new(size, 0.0),
    ]
}

/// Projective mapping between the canonical square and the source image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanonicalTransform {
    /// Side of the canonical square, in pixels.
    pub size: usize,
    /// Canonical pixel -> source pixel. Used for sampling.
    pub h_img_from_rect: Homography,
    /// Source pixel -> canonical pixel.
    pub h_rect_from_img: Homography,
}

impl CanonicalTransform {
    #[inline]
    pub fn rect_to_img(&self, p: Point2<f64>) -> Point2<f64> {
        self.h_img_from_rect.apply(p)
    }

    #[inline]
    pub fn img_to_rect(&self, p: Point2<f64>) -> Point2<f64> {
        self.h_rect_from_img.apply(p)
    }
}

/// Fit the homography taking the canonical square of side `size` onto `quad`.
pub fn estimate_transform(
    quad: &Quadrilateral,
    size: usize,
) -> Result<CanonicalTransform, RectifyError> {
    if size == 0 || size.checked_mul(size).is_none() {
        return Err(RectifyError::InvalidOutputSize);
    }
    let rect = canonical_square(size as f64);
    let h_img_from_rect =
        homography_from_4pt(&rect, &quad.to_array()).ok_or(RectifyError::DegenerateTransform)?;
    let h_rect_from_img = h_img_from_rect
        .inverse()
        .ok_or(RectifyError::DegenerateTransform)?;
    debug!("canonical -> image homography: {:?}", h_img_from_rect.to_array());

    Ok(CanonicalTransform {
        size,
        h_img_from_rect,
        h_rect_from_img,
    })
}

/// Resample `src` into the canonical square described by `transform`.
///
/// The output size comes from `transform`; fill value and interpolation
/// come from `params`.
pub fn warp_to_canonical(
    src: &GrayImageView<'_>,
    transform: &CanonicalTransform,
    params: &RectifyParams,
) -> GrayImage {
    let mut warp = params.warp_params();
    warp.out_w = transform.size;
    warp.out_h = transform.size;
    warp_perspective_gray(src, &transform.h_img_from_rect, &warp)
}
