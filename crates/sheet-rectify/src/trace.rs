//! Optional capture of intermediate images.
//!
//! The pipeline never renders or saves anything itself; it hands images to a
//! caller-provided [`TraceRecorder`]. Stage names are the constants below.

use sheet_rectify_core::{GrayImage, GrayImageView};

/// Stage name for the untouched source image.
pub const STAGE_ORIGINAL: &str = "original";
/// Stage name for the rectified output.
pub const STAGE_RESULT: &str = "result";

/// Sink for intermediate images.
pub trait TraceRecorder {
    fn record(&mut self, stage: &str, image: &GrayImageView<'_>);
}

/// Recorder that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl TraceRecorder for NoTrace {
    #[inline]
    fn record(&mut self, _stage: &str, _image: &GrayImageView<'_>) {}
}

/// Recorder keeping an owned copy of every image, in call order.
#[derive(Clone, Debug, Default)]
pub struct StageTrace {
    pub steps: Vec<(String, GrayImage)>,
}

impl StageTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.steps.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn get(&self, stage: &str) -> Option<&GrayImage> {
        self.steps
            .iter()
            .find(|(name, _)| name == stage)
            .map(|(_, img)| img)
    }
}

impl TraceRecorder for StageTrace {
    fn record(&mut self, stage: &str, image: &GrayImageView<'_>) {
        self.steps.push((
            stage.to_string(),
            GrayImage {
                width: image.width,
                height: image.height,
                data: image.data.to_vec(),
            },
        ));
    }
}

impl<F> TraceRecorder for F
where
    F: FnMut(&str, &GrayImageView<'_>),
{
    fn record(&mut self, stage: &str, image: &GrayImageView<'_>) {
        self(stage, image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_trace_keeps_copies_in_order() {
        let a = GrayImage::filled(2, 2, 1);
        let b = GrayImage::filled(3, 1, 2);
        let mut trace = StageTrace::new();
        trace.record(STAGE_ORIGINAL, &a.view());
        trace.record(STAGE_RESULT, &b.view());

        assert_eq!(trace.stage_names(), vec![STAGE_ORIGINAL, STAGE_RESULT]);
        assert_eq!(trace.get(STAGE_RESULT), Some(&b));
        assert!(trace.get("missing").is_none());
    }

    #[test]
    fn closures_are_recorders() {
        let mut sizes = Vec::new();
        {
            let mut rec = |stage: &str, img: &GrayImageView<'_>| {
                sizes.push((stage.to_string(), img.width * img.height));
            };
            let img = GrayImage::filled(4, 5, 0);
            TraceRecorder::record(&mut rec, STAGE_RESULT, &img.view());
        }
        assert_eq!(sizes, vec![(STAGE_RESULT.to_string(), 20)]);
    }
}
