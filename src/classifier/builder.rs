use log::{error, info};
use ndarray::Array4;
use ort::session::Session;
use std::path::Path;
use std::sync::Arc;

use super::encode::ImageEncoding;
use super::error::ClassifierError;
use super::model::LeafClassifier;
use crate::labels::ClassLabel;
use crate::runtime::{create_session_builder, RuntimeConfig};

/// Input resolution the bundled model was trained at.
pub const DEFAULT_INPUT_SIZE: u32 = 180;

/// A builder for constructing a LeafClassifier with a fluent interface.
#[derive(Default, Debug)]
pub struct ClassifierBuilder {
    model_path: Option<String>,
    session: Option<Session>,
    input_size: Option<u32>,
    runtime_config: RuntimeConfig,
}

impl ImageEncoding for ClassifierBuilder {
    /// Returns a reference to the ONNX session if it exists
    fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn input_size(&self) -> Option<u32> {
        Some(self.input_size.unwrap_or(DEFAULT_INPUT_SIZE))
    }
}

impl ClassifierBuilder {
    /// Creates a new empty ClassifierBuilder instance with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the runtime configuration for ONNX model execution
    pub fn with_runtime_config(mut self, config: RuntimeConfig) -> Self {
        self.runtime_config = config;
        self
    }

    /// Overrides the square input resolution the model expects.
    ///
    /// The default of 180 matches the bundled artifact; a replacement
    /// model trained at a different resolution must change this in
    /// lockstep.
    pub fn with_input_size(mut self, size: u32) -> Result<Self, ClassifierError> {
        if size == 0 {
            return Err(ClassifierError::BuildError("Input size cannot be zero".into()));
        }
        self.input_size = Some(size);
        Ok(self)
    }

    /// Loads the ONNX model at `path`.
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance if successful, or an error if:
    ///   - The model path is already set
    ///   - The file does not exist
    ///   - The model failed to load
    ///   - The model structure is invalid
    pub fn with_model_file(mut self, path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        if self.model_path.is_some() {
            return Err(ClassifierError::BuildError("Model path already set".to_string()));
        }
        if !path.exists() {
            return Err(ClassifierError::BuildError(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        // Create session using the singleton environment
        let session = create_session_builder(&self.runtime_config)?.commit_from_file(path)?;

        Self::validate_model(&session)?;
        info!("Model structure validated successfully");

        self.model_path = Some(path.to_string_lossy().to_string());
        self.session = Some(session);
        Ok(self)
    }

    /// Builds and returns the final LeafClassifier instance.
    ///
    /// Runs a zero-filled probe image through the model so an artifact
    /// whose output disagrees with the ten-label contract fails here,
    /// at startup, instead of on the first request.
    pub fn build(mut self) -> Result<LeafClassifier, ClassifierError> {
        if self.model_path.is_none() || self.session.is_none() {
            return Err(ClassifierError::BuildError("A model file must be set".to_string()));
        }
        let input_size = self.input_size.unwrap_or(DEFAULT_INPUT_SIZE);

        let side = input_size as usize;
        let probe = Array4::<f32>::zeros((1, side, side, 3));
        let scores = self.run_inference(probe).map_err(|e| {
            error!("Model rejected the probe input: {}", e);
            ClassifierError::BuildError(format!(
                "Model rejected a {}x{} probe input: {}",
                input_size, input_size, e
            ))
        })?;

        if scores.len() != ClassLabel::ALL.len() {
            return Err(ClassifierError::BuildError(format!(
                "Model produces {} scores but {} labels are defined",
                scores.len(),
                ClassLabel::ALL.len()
            )));
        }
        info!("Model probe produced {} class scores", scores.len());

        let session = Arc::new(
            self.session
                .take()
                .ok_or_else(|| ClassifierError::BuildError("No ONNX model loaded".into()))?,
        );

        Ok(LeafClassifier {
            model_path: self.model_path.take().unwrap(),
            session,
            input_size,
        })
    }

    /// Validates that the model has the expected input/output structure
    fn validate_model(session: &Session) -> Result<(), ClassifierError> {
        if session.inputs.is_empty() {
            return Err(ClassifierError::ModelError(
                "Model must have at least 1 input for the image tensor".to_string(),
            ));
        }
        if session.outputs.is_empty() {
            return Err(ClassifierError::ModelError(
                "Model must have at least 1 output for class scores".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_file_is_rejected() {
        let result = ClassifierBuilder::new().with_model_file("does/not/exist.onnx");
        assert!(matches!(result, Err(ClassifierError::BuildError(_))));
    }

    #[test]
    fn zero_input_size_is_rejected() {
        let result = ClassifierBuilder::new().with_input_size(0);
        assert!(result.is_err());
    }

    #[test]
    fn build_without_model_fails() {
        let result = ClassifierBuilder::new().build();
        assert!(matches!(result, Err(ClassifierError::BuildError(_))));
    }
}
