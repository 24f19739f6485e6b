//! Adapters between `image::GrayImage` and the lightweight core image types.

use sheet_rectify_core::{GrayImage, GrayImageView};

/// Borrow an `image::GrayImage` as a core view without copying.
pub fn gray_view(img: &::image::GrayImage) -> GrayImageView<'_> {
    GrayImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Move a core image into an `image::GrayImage`.
///
/// Returns `None` if the dimensions do not fit in `u32` or the buffer is
/// inconsistent with them.
pub fn to_image(img: GrayImage) -> Option<::image::GrayImage> {
    let width = u32::try_from(img.width).ok()?;
    let height = u32::try_from(img.height).ok()?;
    ::image::GrayImage::from_raw(width, height, img.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_shares_the_buffer() {
        let img = ::image::GrayImage::from_fn(4, 3, |x, y| ::image::Luma([(x + 10 * y) as u8]));
        let view = gray_view(&img);
        assert_eq!((view.width, view.height), (4, 3));
        assert_eq!(view.data[2 * 4 + 1], 21);
    }

    #[test]
    fn core_image_converts_back() {
        let core = GrayImage::filled(5, 2, 9);
        let img = to_image(core).expect("consistent");
        assert_eq!(img.dimensions(), (5, 2));
        assert!(img.pixels().all(|p| p.0[0] == 9));

        let broken = GrayImage {
            width: 5,
            height: 2,
            data: vec![0; 3],
        };
        assert!(to_image(broken).is_none());
    }
}
