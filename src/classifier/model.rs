use ort::session::Session;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

use super::encode::ImageEncoding;
use super::error::ClassifierError;
use super::utils::{argmax, softmax};
use crate::labels::ClassLabel;

/// How far the raw output may drift from a unit sum before it is
/// treated as unnormalized logits.
const PROBABILITY_SUM_TOLERANCE: f32 = 1e-3;

/// Result of classifying a single leaf photograph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub label: ClassLabel,
    /// Probability mass assigned to `label`, in `[0, 1]`.
    pub confidence: f32,
}

/// A leaf-image species classifier backed by a pretrained ONNX model.
///
/// The session is loaded once at construction and never reloaded; it is
/// shared read-only behind an `Arc`, so the classifier can serve
/// concurrent `classify` calls from multiple threads.
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use leaflore::LeafClassifier;
///
/// let classifier = LeafClassifier::builder()
///     .with_model_file("models/leaf_cnn.onnx")?
///     .build()?;
///
/// let result = classifier.classify("leaf.jpg")?;
/// println!("{} ({:.1}%)", result.label, result.confidence * 100.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LeafClassifier {
    pub model_path: String,
    pub session: Arc<Session>,
    pub input_size: u32,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<LeafClassifier>();
    }
};

impl ImageEncoding for LeafClassifier {
    fn session(&self) -> Option<&Session> {
        Some(&self.session)
    }

    fn input_size(&self) -> Option<u32> {
        Some(self.input_size)
    }
}

impl LeafClassifier {
    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            model_path: self.model_path.clone(),
            input_size: self.input_size,
            num_labels: ClassLabel::ALL.len(),
        }
    }

    /// Classifies the image at `path` as one of the ten known species.
    ///
    /// # Errors
    /// - `DecodeError` if the image cannot be read or decoded
    /// - `ShapeError` if the model output disagrees with the label set
    /// - `ModelError` if the forward pass fails
    pub fn classify(&self, path: impl AsRef<Path>) -> Result<Classification, ClassifierError> {
        let probabilities = self.probabilities(path)?;
        let index = argmax(&probabilities)
            .ok_or_else(|| ClassifierError::ShapeError("Model produced an empty score vector".into()))?;
        let label = ClassLabel::from_index(index).ok_or_else(|| {
            ClassifierError::ShapeError(format!("Predicted index {} has no label", index))
        })?;

        Ok(Classification {
            label,
            confidence: probabilities[index],
        })
    }

    /// Full probability vector in label order, for callers that want
    /// more than the top prediction.
    pub fn probabilities(&self, path: impl AsRef<Path>) -> Result<Vec<f32>, ClassifierError> {
        let tensor = self.encode_image(path.as_ref())?;
        let raw = self.run_inference(tensor)?;

        if raw.len() != ClassLabel::ALL.len() {
            return Err(ClassifierError::ShapeError(format!(
                "Model produced {} scores for {} labels",
                raw.len(),
                ClassLabel::ALL.len()
            )));
        }

        // Exported artifacts do not always keep their softmax head.
        let sum: f32 = raw.iter().sum();
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            Ok(softmax(&raw))
        } else {
            Ok(raw)
        }
    }
}
