use image::imageops::FilterType;
use ndarray::Array4;
use ort::session::Session;
use ort::value::Tensor;
use std::collections::HashMap;
use std::path::Path;

use super::error::ClassifierError;

/// Converts a leaf photograph into the tensor the model consumes.
///
/// Shared by the classifier and its builder so both run the same
/// pipeline:
/// 1. Decode the raster image (JPEG/PNG, anything the decoder handles)
/// 2. Resize to the model's square input resolution (bilinear)
/// 3. Scale RGB bytes into `[0, 1]` floats, shape `[1, size, size, 3]`
///
/// The ONNX model is expected to:
/// - Accept one image tensor of shape [batch_size, height, width, 3]
/// - Output class scores of shape [batch_size, num_labels]
pub(crate) trait ImageEncoding {
    /// Returns the loaded ONNX session if available
    fn session(&self) -> Option<&Session>;

    /// Returns the model's expected square input resolution
    fn input_size(&self) -> Option<u32>;

    /// Decodes and preprocesses an image file into a batch-of-one tensor.
    ///
    /// # Errors
    /// - `BuildError` if the input size is not configured
    /// - `DecodeError` if the file is unreadable or not a decodable image
    fn encode_image(&self, path: &Path) -> Result<Array4<f32>, ClassifierError> {
        let size = self
            .input_size()
            .ok_or_else(|| ClassifierError::BuildError("Input size not set".into()))?;

        let decoded = image::open(path).map_err(|e| {
            ClassifierError::DecodeError(format!("Failed to decode {}: {}", path.display(), e))
        })?;
        let resized = decoded
            .resize_exact(size, size, FilterType::Triangle)
            .to_rgb8();

        let side = size as usize;
        let mut tensor = Array4::<f32>::zeros((1, side, side, 3));
        for (x, y, pixel) in resized.enumerate_pixels() {
            for channel in 0..3 {
                tensor[[0, y as usize, x as usize, channel]] = pixel[channel] as f32 / 255.0;
            }
        }
        Ok(tensor)
    }

    /// Runs one forward pass and returns the raw score vector.
    ///
    /// # Errors
    /// - `ModelError` if the session is not initialized
    /// - `ModelError` if tensor creation or model execution fails
    /// - `ShapeError` if the output is not a [1, n] score matrix
    fn run_inference(&self, input: Array4<f32>) -> Result<Vec<f32>, ClassifierError> {
        let session = self
            .session()
            .ok_or_else(|| ClassifierError::ModelError("Session not initialized".into()))?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .ok_or_else(|| ClassifierError::ModelError("Model declares no inputs".into()))?;

        let input_dyn = input.into_dyn();
        let pixels = input_dyn.as_standard_layout();

        let mut input_tensors = HashMap::new();
        input_tensors.insert(
            input_name.as_str(),
            Tensor::from_array(&pixels).map_err(|e| {
                ClassifierError::ModelError(format!("Failed to create input tensor: {}", e))
            })?,
        );

        let outputs = session
            .run(input_tensors)
            .map_err(|e| ClassifierError::ModelError(format!("Failed to run model: {}", e)))?;
        let scores = outputs[0].try_extract_tensor::<f32>().map_err(|e| {
            ClassifierError::ModelError(format!("Failed to extract output tensor: {}", e))
        })?;

        if scores.ndim() != 2 || scores.shape()[0] != 1 {
            return Err(ClassifierError::ShapeError(format!(
                "Expected output shape [1, n], got {:?}",
                scores.shape()
            )));
        }
        Ok(scores.slice(ndarray::s![0, ..]).iter().copied().collect())
    }
}
