mod builder;
mod encode;
mod error;
mod model;
mod utils;

pub use builder::{ClassifierBuilder, DEFAULT_INPUT_SIZE};
pub use error::ClassifierError;
pub use model::{Classification, LeafClassifier};

/// Information about the current state and configuration of a classifier
#[derive(Debug, Clone)]
pub struct ClassifierInfo {
    /// Path to the ONNX model file
    pub model_path: String,
    /// Square input resolution the model expects
    pub input_size: u32,
    /// Number of species labels the output vector covers
    pub num_labels: usize,
}
