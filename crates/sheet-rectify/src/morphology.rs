//! Dilation-then-erosion cleanup for binary masks.
//!
//! Nonzero pixels are foreground. The footprint is the 3×3 cross (L1
//! distance 1); pixels outside the image never count as neighbours.

use ::image::GrayImage;
use imageproc::distance_transform::Norm;
use imageproc::morphology::{dilate, erode};

/// Run `passes` dilations, then `passes` erosions.
///
/// This is *not* the same as `passes` alternating closings for `passes > 1`.
/// Outputs are `255` / `0`; `passes == 0` returns the input unchanged.
pub fn dilate_then_erode(src: &GrayImage, passes: usize) -> GrayImage {
    let mut img = src.clone();
    for _ in 0..passes {
        img = dilate(&img, Norm::L1, 1);
    }
    for _ in 0..passes {
        img = erode(&img, Norm::L1, 1);
    }
    img
}
