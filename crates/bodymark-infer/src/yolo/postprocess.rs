use bodymark_base::{Rect, Tensor, Vec2};

use super::coco::{COCO_KEYPOINT_COUNT, PoseDetection};
use super::preprocess::Letterbox;
use crate::InferError;

pub const DEFAULT_IOU_THRESHOLD: f32 = 0.45;

// cx, cy, w, h, score, then (x, y, confidence) per keypoint
const FEATURES: usize = 5 + 3 * COCO_KEYPOINT_COUNT;

/// Decode a raw `[1, 56, N]` YOLO pose output.
///
/// Candidates under `conf_threshold` are dropped, the rest go through greedy
/// NMS. Boxes and keypoints are mapped back to source image pixels. The result
/// is sorted by confidence, highest first.
pub fn postprocess(
    output: &Tensor<f32>,
    letterbox: &Letterbox,
    conf_threshold: f32,
    iou_threshold: f32,
) -> Result<Vec<PoseDetection>, InferError> {
    if output.shape.len() != 3 || output.shape[0] != 1 || output.shape[1] != FEATURES {
        return Err(InferError::MalformedResult(format!(
            "expected [1, {}, N] output, got {:?}",
            FEATURES, output.shape
        )));
    }
    let n = output.shape[2];
    let at = |feature: usize, i: usize| output.data[feature * n + i];

    let mut candidates: Vec<PoseDetection> = Vec::new();
    for i in 0..n {
        let confidence = at(4, i);
        if confidence.is_nan() || confidence < conf_threshold {
            continue;
        }

        let (cx, cy) = letterbox.unmap(at(0, i), at(1, i));
        let size = Vec2::new(at(2, i), at(3, i)) / letterbox.scale;
        let bbox = Rect::new(Vec2::new(cx - size.x / 2.0, cy - size.y / 2.0), size);

        let mut keypoints = [(Vec2::new(0.0, 0.0), 0.0); COCO_KEYPOINT_COUNT];
        for (k, keypoint) in keypoints.iter_mut().enumerate() {
            let base = 5 + k * 3;
            let (x, y) = letterbox.unmap(at(base, i), at(base + 1, i));
            *keypoint = (Vec2::new(x, y), at(base + 2, i));
        }

        candidates.push(PoseDetection {
            bbox,
            confidence,
            keypoints,
        });
    }

    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let mut kept: Vec<PoseDetection> = Vec::new();
    for candidate in candidates {
        if kept
            .iter()
            .all(|k| k.bbox.iou(candidate.bbox) <= iou_threshold)
        {
            kept.push(candidate);
        }
    }
    Ok(kept)
}
