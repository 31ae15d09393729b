//! End-to-end classifier tests.
//!
//! The real pretrained artifact is deployed out-of-band; point
//! `LEAFLORE_MODEL` at it to run the inference tests, the same way the
//! CLI locates the model. Without it only the construction-failure
//! cases run.

use image::{Rgb, RgbImage};
use leaflore::{ClassLabel, LeafClassifier};
use std::path::PathBuf;

fn model_path() -> Option<PathBuf> {
    std::env::var_os("LEAFLORE_MODEL")
        .map(PathBuf::from)
        .filter(|path| path.exists())
}

fn solid_image(value: u8) -> PathBuf {
    let path = std::env::temp_dir().join(format!("leaflore-solid-{}.png", value));
    RgbImage::from_pixel(64, 64, Rgb([value, value, value]))
        .save(&path)
        .expect("write test image");
    path
}

#[test]
fn classifies_solid_images_within_the_label_contract() {
    let Some(model) = model_path() else {
        eprintln!("LEAFLORE_MODEL not set, skipping inference test");
        return;
    };

    let classifier = LeafClassifier::builder()
        .with_model_file(&model)
        .expect("load model")
        .build()
        .expect("build classifier");

    for value in [0u8, 255u8] {
        let image = solid_image(value);

        let result = classifier.classify(&image).expect("classify");
        assert!(ClassLabel::ALL.contains(&result.label));
        assert!((0.0..=1.0).contains(&result.confidence));

        let probabilities = classifier.probabilities(&image).expect("probabilities");
        assert_eq!(probabilities.len(), ClassLabel::ALL.len());
        let sum: f32 = probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-3, "probabilities sum to {}", sum);
    }
}

#[test]
fn classification_is_deterministic_for_the_same_image() {
    let Some(model) = model_path() else {
        eprintln!("LEAFLORE_MODEL not set, skipping inference test");
        return;
    };

    let classifier = LeafClassifier::builder()
        .with_model_file(&model)
        .expect("load model")
        .build()
        .expect("build classifier");

    let image = solid_image(128);
    let first = classifier.classify(&image).expect("classify");
    let second = classifier.classify(&image).expect("classify");
    assert_eq!(first, second);
}

#[test]
fn missing_model_file_fails_to_build() {
    let result = LeafClassifier::builder().with_model_file("does/not/exist.onnx");
    assert!(result.is_err());
}

#[test]
fn unreadable_image_is_a_decode_error() {
    let Some(model) = model_path() else {
        eprintln!("LEAFLORE_MODEL not set, skipping inference test");
        return;
    };

    let classifier = LeafClassifier::builder()
        .with_model_file(&model)
        .expect("load model")
        .build()
        .expect("build classifier");

    let garbage = std::env::temp_dir().join("leaflore-garbage.jpg");
    std::fs::write(&garbage, b"definitely not a jpeg").expect("write garbage");

    let err = classifier.classify(&garbage).unwrap_err();
    assert!(err.to_string().contains("Decode error"));
}
