//! Error types for object store operations

use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::operation::put_object::PutObjectError;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The store rejected or failed the write
    #[error("Upload failed: {0}")]
    Upload(String),
}

impl From<SdkError<PutObjectError>> for StorageError {
    fn from(error: SdkError<PutObjectError>) -> Self {
        StorageError::Upload(DisplayErrorContext(&error).to_string())
    }
}
