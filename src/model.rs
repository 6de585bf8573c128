//! Model gateway - ONNX Runtime integration
//!
//! Loads the trained regression artifact once at startup and answers
//! single-sample prediction requests for the lifetime of the process.
//! A failed load produces an unavailable gateway instead of an abort.

use ndarray::Array2;
use parking_lot::Mutex;
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Value;
use thiserror::Error;

use crate::features::{FeatureVector, FEATURE_COUNT};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model not loaded")]
    Unavailable,

    #[error("failed to load model: {0}")]
    Load(String),

    #[error("inference failed: {0}")]
    Inference(String),
}

/// Single-sample prediction over a pre-loaded model.
///
/// Handlers hold this behind `Arc<dyn InferenceEngine>` so tests can
/// substitute a stub for the ONNX session.
pub trait InferenceEngine: Send + Sync {
    /// Run inference for one feature vector, returning the scalar output.
    fn predict(&self, features: &FeatureVector) -> Result<f32, ModelError>;

    fn is_loaded(&self) -> bool;

    fn model_name(&self) -> &str;
}

/// ONNX-backed gateway. The session takes `&mut self` per run, so it
/// sits behind a `Mutex`; the model itself is never mutated.
#[derive(Debug)]
pub struct OnnxGateway {
    session: Option<Mutex<Session>>,
    name: String,
}

impl OnnxGateway {
    /// Load the ONNX artifact from disk.
    pub fn load(model_path: &str) -> Result<Self, ModelError> {
        tracing::info!("Loading ONNX model from: {}", model_path);

        if !std::path::Path::new(model_path).exists() {
            return Err(ModelError::Load(format!("model not found: {}", model_path)));
        }

        let session = Session::builder()
            .map_err(|e| ModelError::Load(format!("session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Load(format!("optimization level: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| ModelError::Load(format!("load: {}", e)))?;

        tracing::info!("ONNX model loaded");

        Ok(Self {
            session: Some(Mutex::new(session)),
            name: model_path.to_string(),
        })
    }

    /// Gateway with no model. Every predict call fails with `Unavailable`.
    pub fn unavailable() -> Self {
        Self {
            session: None,
            name: "none".to_string(),
        }
    }
}

impl InferenceEngine for OnnxGateway {
    fn predict(&self, features: &FeatureVector) -> Result<f32, ModelError> {
        let session = self.session.as_ref().ok_or(ModelError::Unavailable)?;
        let mut session = session.lock();

        // Shape (1, 8): one sample of eight features
        let input_array = Array2::<f32>::from_shape_vec(
            (1, FEATURE_COUNT),
            features.as_slice().to_vec(),
        )
        .map_err(|e| ModelError::Inference(format!("input shape: {}", e)))?;

        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| ModelError::Inference("model defines no output".to_string()))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ModelError::Inference(format!("input tensor: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ModelError::Inference(format!("run: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| ModelError::Inference("no output produced".to_string()))?;

        let (_, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError::Inference(format!("extract: {}", e)))?;

        data.first()
            .copied()
            .ok_or_else(|| ModelError::Inference("empty output tensor".to_string()))
    }

    fn is_loaded(&self) -> bool {
        self.session.is_some()
    }

    fn model_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_gateway_rejects_predictions() {
        let gateway = OnnxGateway::unavailable();
        assert!(!gateway.is_loaded());

        let features = FeatureVector::from_values([0.0; FEATURE_COUNT]);
        assert!(matches!(
            gateway.predict(&features),
            Err(ModelError::Unavailable)
        ));
    }

    #[test]
    fn missing_artifact_fails_load() {
        let err = OnnxGateway::load("does/not/exist.onnx").unwrap_err();
        assert!(matches!(err, ModelError::Load(_)));
        assert!(err.to_string().contains("not found"));
    }
}
