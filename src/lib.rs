pub mod catalog;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

// Re-export commonly used items for convenience
pub use client::{ClientError, StoreS3DataClient};
pub use config::ServerConfig;
pub use errors::app_error::{AppError, AppResult};
pub use state::AppState;
pub use store::{CallRecord, CallStore, MemoryCallStore, SupabaseCallStore};
pub use utils::construct_s3_directory;
