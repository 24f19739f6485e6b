use serde::{Deserialize, Serialize};
use sheet_rectify_core::{Interpolation, WarpParams};

/// Opt-in sanity checks on the selected corners.
///
/// Corner selection itself never rejects anything; enabling this policy
/// turns repeated or nearly collinear corners into
/// [`RectifyError::InvalidQuadrilateral`](crate::RectifyError::InvalidQuadrilateral).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadValidationParams {
    /// Minimal distance between any two corners, in source pixels.
    pub min_corner_distance: f64,
    /// Minimal |sin| of the turn angle at each corner.
    pub min_turn_sin: f64,
}

impl Default for QuadValidationParams {
    fn default() -> Self {
        Self {
            min_corner_distance: 1.0,
            min_turn_sin: 1e-3,
        }
    }
}

/// Configuration for the [`Rectifier`](crate::Rectifier).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectifyParams {
    /// Side of the canonical output square, in pixels.
    pub output_size: usize,
    /// Value written where the source has no data.
    pub fill_value: u8,
    pub interpolation: Interpolation,
    /// Disabled (`None`) by default.
    pub validation: Option<QuadValidationParams>,
}

impl Default for RectifyParams {
    fn default() -> Self {
        Self {
            output_size: 1000,
            fill_value: 0,
            interpolation: Interpolation::Bilinear,
            validation: None,
        }
    }
}

impl RectifyParams {
    pub fn with_output_size(mut self, output_size: usize) -> Self {
        self.output_size = output_size;
        self
    }

    pub fn with_validation(mut self, validation: QuadValidationParams) -> Self {
        self.validation = Some(validation);
        self
    }

    pub(crate) fn warp_params(&self) -> WarpParams {
        WarpParams {
            out_w: self.output_size,
            out_h: self.output_size,
            fill: self.fill_value,
            interpolation: self.interpolation,
        }
    }
}
