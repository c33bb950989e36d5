//! HTTP request handlers
//!
//! - `api` - Health check endpoint
//! - `calls` - Persisting finished calls with their recording directory
//! - `catalog` - Read-only bot configuration data

pub mod api;
pub mod calls;
pub mod catalog;

pub use calls::store_s3_data;
