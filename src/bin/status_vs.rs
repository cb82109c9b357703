use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vs_loader::{render_status, store_status, Config, OpenAiVectorStores};

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

    info!("Checking vector store status: {}", config.vector_store_id);
    let api = OpenAiVectorStores::new(&config);

    // Errors are reported on stdout; the run exits 0 either way.
    match store_status(&api, &config.vector_store_id).await {
        Ok(store) => println!("{}", render_status(&store)),
        Err(e) => println!("{}", e),
    }

    Ok(())
}
