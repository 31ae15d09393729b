use ort::Error as OrtError;
use std::fmt;

/// Represents the different types of errors that can occur in the leaf classifier.
#[derive(Debug)]
pub enum ClassifierError {
    /// The input image could not be read or decoded
    DecodeError(String),
    /// The decoded image or the model output had an unusable shape
    ShapeError(String),
    /// The ONNX model failed while running a prediction
    ModelError(String),
    /// The classifier could not be constructed
    BuildError(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            Self::ShapeError(msg) => write!(f, "Shape error: {}", msg),
            Self::ModelError(msg) => write!(f, "Model error: {}", msg),
            Self::BuildError(msg) => write!(f, "Build error: {}", msg),
        }
    }
}

impl std::error::Error for ClassifierError {}

impl From<OrtError> for ClassifierError {
    fn from(err: OrtError) -> Self {
        ClassifierError::BuildError(err.to_string())
    }
}
