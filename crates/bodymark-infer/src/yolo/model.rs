use bodymark_base::Tensor;
use bodymark_video::{Frame, Orientation};
use ndarray::ArrayD;
use ort::{inputs, session::Session, value::TensorRef};

use super::{DEFAULT_IOU_THRESHOLD, postprocess, preprocess};
use crate::{BodyObservation, Device, InferError, ModelSource, PoseModel, VerticalAxis};

const DEFAULT_CONF_THRESHOLD: f32 = 0.25;

/// A YOLO pose network (e.g. `yolo11n-pose.onnx`) run through ONNX Runtime.
///
/// The frame is turned upright before inference, so the reported locations
/// are normalized against the upright image with the origin at the top-left.
pub struct YoloPoseModel {
    session: Session,
    conf_threshold: f32,
    iou_threshold: f32,
}

impl YoloPoseModel {
    pub fn new(model: ModelSource, device: Device) -> Result<Self, InferError> {
        let mut builder = Session::builder()?;

        builder = match device {
            Device::Cpu => builder,
            #[cfg(feature = "cuda")]
            Device::Cuda { device_id } => {
                use ort::execution_providers::{CUDAExecutionProvider, ExecutionProvider};
                let provider = CUDAExecutionProvider::default().with_device_id(device_id);
                if !provider.is_available().unwrap_or(false) {
                    log::warn!("yolo: CUDA requested but not available, ONNX Runtime will fall back to CPU");
                }
                builder.with_execution_providers([provider.build()])?
            }
            #[cfg(not(feature = "cuda"))]
            Device::Cuda { .. } => {
                return Err(InferError::Model(format!(
                    "{} requested but built without CUDA support",
                    device
                )));
            }
        };

        let session = match &model {
            ModelSource::File(path) => builder
                .commit_from_file(path)
                .map_err(|e| InferError::Model(format!("{}: {}", path.display(), e)))?,
            ModelSource::Memory(bytes) => builder
                .commit_from_memory(bytes)
                .map_err(|e| InferError::Model(e.to_string()))?,
        };
        log::info!("yolo: loaded {} on {}", model, device);

        Ok(Self {
            session,
            conf_threshold: DEFAULT_CONF_THRESHOLD,
            iou_threshold: DEFAULT_IOU_THRESHOLD,
        })
    }

    /// Minimum person score for a detection to be kept.
    pub fn with_conf_threshold(mut self, threshold: f32) -> Self {
        self.conf_threshold = threshold;
        self
    }

    pub fn with_iou_threshold(mut self, threshold: f32) -> Self {
        self.iou_threshold = threshold;
        self
    }

    pub fn conf_threshold(&self) -> f32 {
        self.conf_threshold
    }

    pub fn iou_threshold(&self) -> f32 {
        self.iou_threshold
    }

    fn run(&mut self, input: Tensor<f32>) -> Result<Tensor<f32>, InferError> {
        let array = ArrayD::from_shape_vec(input.shape, input.data)?;
        let input = TensorRef::from_array_view(array.view())?;
        let outputs = self.session.run(inputs![input])?;
        let output = outputs[0].try_extract_array::<f32>()?;
        Ok(Tensor::new(
            output.shape().to_vec(),
            output.iter().copied().collect(),
        )?)
    }
}

impl PoseModel for YoloPoseModel {
    fn infer(
        &mut self,
        frame: &Frame,
        orientation: Orientation,
    ) -> Result<Vec<BodyObservation>, InferError> {
        let upright = orientation.apply(frame.pixels());
        let upright_size = orientation.upright_size(frame.size());

        let (input, letterbox) = preprocess(&upright)?;
        let output = self.run(input)?;
        let detections = postprocess(&output, &letterbox, self.conf_threshold, self.iou_threshold)?;

        Ok(detections
            .iter()
            .map(|detection| detection.to_observation(upright_size))
            .collect())
    }

    fn vertical_axis(&self) -> VerticalAxis {
        VerticalAxis::TopDown
    }
}

impl std::fmt::Debug for YoloPoseModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YoloPoseModel")
            .field("conf_threshold", &self.conf_threshold)
            .field("iou_threshold", &self.iou_threshold)
            .finish_non_exhaustive()
    }
}

