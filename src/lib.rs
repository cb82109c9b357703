pub mod config;
pub mod ops;
pub mod store;

pub use config::{Config, ConfigError};
pub use ops::{create_and_probe, render_status, store_status, CreateOutcome, StoreOpError};
pub use store::{OpenAiVectorStores, StoreApiError, StoreRecord, VectorStoreApi};
