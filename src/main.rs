use anyhow::Result;
use clap::Parser;
use leaflore::{KnowledgeRetriever, LeafClassifier, ModelLocator};
use log::info;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about = "Identify a plant species from a leaf photo and look up what its leaves are good for", long_about = None)]
struct Args {
    /// Leaf photograph to classify (JPEG or PNG)
    image: PathBuf,

    /// Explicit path to the ONNX model artifact
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Classify only, skip the knowledge lookup
    #[arg(long)]
    skip_lookup: bool,
}

fn resolve_model(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let locator = ModelLocator::new_default();
    let path = match explicit {
        Some(path) => path,
        None => locator.resolve()?,
    };
    locator.verify(&path)?;
    Ok(path)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let model_path = resolve_model(args.model)?;

    let start = Instant::now();
    let classifier = LeafClassifier::builder()
        .with_model_file(&model_path)?
        .build()?;
    let model_info = classifier.info();
    info!(
        "Classifier ready: {} at {}x{} over {} species (took {:.2?})",
        model_info.model_path,
        model_info.input_size,
        model_info.input_size,
        model_info.num_labels,
        start.elapsed()
    );

    let result = classifier.classify(&args.image)?;
    println!("Predicted species: {}", result.label);
    println!("Confidence: {:.1}%", result.confidence * 100.0);

    if args.skip_lookup {
        return Ok(());
    }

    let retriever = KnowledgeRetriever::new()?;
    let lookup_start = Instant::now();
    let excerpts = retriever.fetch(result.label).await;
    info!("Knowledge lookup finished (took {:.2?})", lookup_start.elapsed());

    println!("\nAbout {}:", result.label);
    for excerpt in excerpts {
        println!("{}", excerpt);
    }

    Ok(())
}
