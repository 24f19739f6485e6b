use crate::CornerRole;
use serde::{Deserialize, Serialize};

/// Why an opt-in quadrilateral check rejected the selected corners.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "defect", rename_all = "snake_case")]
pub enum QuadDefect {
    #[error("{first} and {second} corners coincide")]
    CoincidentCorners { first: CornerRole, second: CornerRole },
    #[error("{corner} corner is reflex or nearly collinear with its neighbours")]
    NotConvex { corner: CornerRole },
}

/// Errors returned by the rectification pipeline.
///
/// Every variant is fatal for the current image; nothing is retried.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum RectifyError {
    #[error("no line segments to cluster")]
    InsufficientSegments,
    #[error("convex hull needs 3 non-collinear points ({distinct} distinct points supplied)")]
    InsufficientPoints { distinct: usize },
    #[error("corners do not admit a non-singular projective transform")]
    DegenerateTransform,
    #[error("quadrilateral rejected: {0}")]
    InvalidQuadrilateral(QuadDefect),
    #[error("invalid grayscale image buffer length (expected {expected} bytes, got {got})")]
    InvalidImage { expected: usize, got: usize },
    #[error("output size must be positive and its square must fit in usize")]
    InvalidOutputSize,
}

/// Payload-free discriminant of [`RectifyError`], for reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RectifyErrorKind {
    InsufficientSegments,
    InsufficientPoints,
    DegenerateTransform,
    InvalidQuadrilateral,
    InvalidImage,
    InvalidOutputSize,
}

impl RectifyError {
    pub fn kind(&self) -> RectifyErrorKind {
        match self {
            RectifyError::InsufficientSegments => RectifyErrorKind::InsufficientSegments,
            RectifyError::InsufficientPoints { .. } => RectifyErrorKind::InsufficientPoints,
            RectifyError::DegenerateTransform => RectifyErrorKind::DegenerateTransform,
            RectifyError::InvalidQuadrilateral(_) => RectifyErrorKind::InvalidQuadrilateral,
            RectifyError::InvalidImage { .. } => RectifyErrorKind::InvalidImage,
            RectifyError::InvalidOutputSize => RectifyErrorKind::InvalidOutputSize,
        }
    }
}

impl From<QuadDefect> for RectifyError {
    fn from(defect: QuadDefect) -> Self {
        RectifyError::InvalidQuadrilateral(defect)
    }
}
