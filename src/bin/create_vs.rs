use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vs_loader::{create_and_probe, Config, CreateOutcome, OpenAiVectorStores};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vs_loader=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    info!(
        "Creating a new vector store with {} document(s)",
        config.knowledge_files.len()
    );
    let api = OpenAiVectorStores::new(&config);

    // Errors are reported on stdout; the run exits 0 either way.
    match create_and_probe(&api, &config.vector_store_id, &config.knowledge_files).await {
        CreateOutcome::Created {
            store,
            files,
            probe,
        } => {
            println!("Vector Store: {}", store);
            for file_id in &files {
                println!("Attached file: {}", file_id);
            }
            if let Err(e) = probe {
                println!("{}", e);
            }
        }
        CreateOutcome::Failed(e) => println!("{}", e),
    }

    Ok(())
}
