//! Leaf-photo plant identification with per-species knowledge retrieval.
//!
//! Two components compose into the pipeline: [`LeafClassifier`] turns a
//! leaf photograph into one of ten species labels with a confidence
//! score, and [`KnowledgeRetriever`] turns that label into
//! human-readable excerpts extracted from a curated per-species source
//! page.
//!
//! # Basic Usage
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use leaflore::{KnowledgeRetriever, LeafClassifier};
//!
//! let classifier = LeafClassifier::builder()
//!     .with_model_file("models/leaf_cnn.onnx")?
//!     .build()?;
//!
//! let result = classifier.classify("leaf.jpg")?;
//! println!("{} ({:.1}%)", result.label, result.confidence * 100.0);
//!
//! let retriever = KnowledgeRetriever::new()?;
//! for excerpt in retriever.fetch(result.label).await {
//!     println!("{}", excerpt);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The classifier shares its ONNX session behind an `Arc` and takes
//! `&self` for classification, so it can be cloned into or shared
//! across threads; the builtin source registry is read-only
//! process-wide state and needs no synchronization.

pub mod artifact;
pub mod classifier;
pub mod labels;
pub mod retriever;
mod runtime;

pub use artifact::{ArtifactError, ModelLocator};
pub use classifier::{
    Classification, ClassifierBuilder, ClassifierError, ClassifierInfo, LeafClassifier,
    DEFAULT_INPUT_SIZE,
};
pub use labels::{ClassLabel, UnknownLabel};
pub use retriever::{
    ExtractionRule, FetchError, FetchedPage, HttpFetcher, KnowledgeRetriever, PageFetcher,
    SourceEntry, SourceRegistry,
};
pub use runtime::{create_session_builder, RuntimeConfig};

pub fn init_logger() {
    env_logger::init();
}
