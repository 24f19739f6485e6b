/// Tolerance (in pixels) within which a sample just past the last pixel
/// center is still considered inside the image.
const BOUNDS_EPS: f64 = 1e-6;

#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    /// Allocate a `width × height` image filled with `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    #[inline]
    pub fn view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}

impl GrayImageView<'_> {
    /// `true` when the buffer length matches the declared dimensions.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.width.checked_mul(self.height) == Some(self.data.len())
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Clamp `(x, y)` into the pixel-center rectangle, or `None` when the
    /// coordinate is outside it (or not finite).
    #[inline]
    fn clamp_inside(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if self.width == 0 || self.height == 0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let max_x = (self.width - 1) as f64;
        let max_y = (self.height - 1) as f64;
        if x < -BOUNDS_EPS || y < -BOUNDS_EPS || x > max_x + BOUNDS_EPS || y > max_y + BOUNDS_EPS
        {
            return None;
        }
        Some((x.clamp(0.0, max_x), y.clamp(0.0, max_y)))
    }
}

/// Bilinear sample at `(x, y)`; `fill` outside the image.
#[inline]
pub fn sample_bilinear(src: &GrayImageView<'_>, x: f64, y: f64, fill: u8) -> u8 {
    let Some((x, y)) = src.clamp_inside(x, y) else {
        return fill;
    };
    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(src.width - 1);
    let y1 = (y0 + 1).min(src.height - 1);
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = src.at(x0, y0) as f64;
    let p10 = src.at(x1, y0) as f64;
    let p01 = src.at(x0, y1) as f64;
    let p11 = src.at(x1, y1) as f64;

    let a = p00 + fx * (p10 - p00);
    let b = p01 + fx * (p11 - p01);
    (a + fy * (b - a)).round().clamp(0.0, 255.0) as u8
}

/// Nearest-neighbour sample at `(x, y)`; `fill` outside the image.
#[inline]
pub fn sample_nearest(src: &GrayImageView<'_>, x: f64, y: f64, fill: u8) -> u8 {
    match src.clamp_inside(x, y) {
        Some((x, y)) => src.at(x.round() as usize, y.round() as usize),
        None => fill,
    }
}
