pub mod s3_directory;
pub use s3_directory::{PathError, construct_s3_directory};
