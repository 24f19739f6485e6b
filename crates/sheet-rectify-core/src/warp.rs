use crate::{sample_bilinear, sample_nearest, GrayImage, GrayImageView, Homography};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Sampling method used when resampling through a homography.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    Nearest,
    #[default]
    Bilinear,
}

/// Output geometry and sampling options for [`warp_perspective_gray`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WarpParams {
    pub out_w: usize,
    pub out_h: usize,
    /// Value written where the mapped coordinate falls outside the source.
    pub fill: u8,
    pub interpolation: Interpolation,
}

fn warp_row(
    src: &GrayImageView<'_>,
    h_img_from_rect: &Homography,
    params: &WarpParams,
    y: usize,
    row: &mut [u8],
) {
    for (x, out) in row.iter_mut().enumerate() {
        // integer output pixel, not its center
        let pi = h_img_from_rect.apply(Point2::new(x as f64, y as f64));
        *out = match params.interpolation {
            Interpolation::Bilinear => sample_bilinear(src, pi.x, pi.y, params.fill),
            Interpolation::Nearest => sample_nearest(src, pi.x, pi.y, params.fill),
        };
    }
}

/// Warp into rectified image: for each dst pixel, map to src via H_img_from_rect and sample.
///
/// With the `rayon` feature rows are filled in parallel; the output is
/// identical either way. Panics if `out_w * out_h` overflows `usize`;
/// callers taking sizes from configuration validate them first.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "debug",
        skip(src, h_img_from_rect, params),
        fields(out_w = params.out_w, out_h = params.out_h)
    )
)]
pub fn warp_perspective_gray(
    src: &GrayImageView<'_>,
    h_img_from_rect: &Homography,
    params: &WarpParams,
) -> GrayImage {
    let mut out = vec![params.fill; params.out_w * params.out_h];
    if params.out_w == 0 {
        return GrayImage {
            width: 0,
            height: params.out_h,
            data: out,
        };
    }

    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        out.par_chunks_mut(params.out_w)
            .enumerate()
            .for_each(|(y, row)| warp_row(src, h_img_from_rect, params, y, row));
    }
    #[cfg(not(feature = "rayon"))]
    {
        for (y, row) in out.chunks_mut(params.out_w).enumerate() {
            warp_row(src, h_img_from_rect, params, y, row);
        }
    }

    GrayImage {
        width: params.out_w,
        height: params.out_h,
        data: out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Matrix3;

    fn gradient(w: usize, h: usize) -> GrayImage {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(((x * 7 + y * 13) % 256) as u8);
            }
        }
        GrayImage {
            width: w,
            height: h,
            data,
        }
    }

    fn params(w: usize, h: usize, interpolation: Interpolation) -> WarpParams {
        WarpParams {
            out_w: w,
            out_h: h,
            fill: 0,
            interpolation,
        }
    }

    #[test]
    fn identity_warp_copies_the_source() {
        let img = gradient(16, 12);
        let out = warp_perspective_gray(
            &img.view(),
            &Homography::identity(),
            &params(16, 12, Interpolation::Bilinear),
        );
        assert_eq!(out, img);
    }

    #[test]
    fn translation_crops_and_fills() {
        let img = gradient(8, 8);
        let shift = Homography::new(Matrix3::new(
            1.0, 0.0, 4.0, //
            0.0, 1.0, 2.0, //
            0.0, 0.0, 1.0,
        ));
        let mut p = params(8, 8, Interpolation::Nearest);
        p.fill = 255;
        let out = warp_perspective_gray(&img.view(), &shift, &p);

        assert_eq!(out.get(0, 0), img.get(4, 2));
        assert_eq!(out.get(3, 5), img.get(7, 7));
        // (4, 0) maps to x = 8, past the last column
        assert_eq!(out.get(4, 0), 255);
        assert_eq!(out.get(0, 6), 255);
    }

    #[test]
    fn half_pixel_scale_interpolates() {
        let img = GrayImage {
            width: 2,
            height: 1,
            data: vec![0, 200],
        };
        let half = Homography::new(Matrix3::new(
            0.5, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ));
        let bilinear =
            warp_perspective_gray(&img.view(), &half, &params(3, 1, Interpolation::Bilinear));
        assert_eq!(bilinear.data, vec![0, 100, 200]);

        let nearest =
            warp_perspective_gray(&img.view(), &half, &params(3, 1, Interpolation::Nearest));
        assert_eq!(nearest.data, vec![0, 200, 200]);
    }

    #[test]
    fn output_has_requested_shape() {
        let img = gradient(4, 4);
        let out = warp_perspective_gray(
            &img.view(),
            &Homography::identity(),
            &params(7, 3, Interpolation::Bilinear),
        );
        assert_eq!((out.width, out.height, out.data.len()), (7, 3, 21));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_rows_match_the_sequential_kernel() {
        let img = gradient(64, 48);
        let h = Homography::new(Matrix3::new(
            0.9, 0.12, 3.0, //
            -0.08, 0.85, 5.0, //
            0.0004, 0.0006, 1.0,
        ));
        for interpolation in [Interpolation::Nearest, Interpolation::Bilinear] {
            let p = params(57, 41, interpolation);
            let mut sequential = vec![p.fill; p.out_w * p.out_h];
            for (y, row) in sequential.chunks_mut(p.out_w).enumerate() {
                warp_row(&img.view(), &h, &p, y, row);
            }
            let parallel = warp_perspective_gray(&img.view(), &h, &p);
            assert_eq!(parallel.data, sequential);
        }
    }
}
