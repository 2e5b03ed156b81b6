//! Object storage for uploaded airport images

mod error;
mod s3;

use async_trait::async_trait;
use axum::body::Bytes;

pub use error::{StorageError, StorageResult};
pub use s3::S3ObjectStore;

/// Content type written for every uploaded image
pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// Write side of a bucket that serves its objects publicly
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `body` under `key`, replacing any existing object
    async fn put_object(&self, key: &str, body: Bytes, content_type: &str) -> StorageResult<()>;

    /// Public URL at which the object under `key` is served
    fn public_url(&self, key: &str) -> String;
}

/// Object key for an airport's image: spaces become underscores, `.jpg` appended
pub fn object_key(airport_name: &str) -> String {
    format!("{}.jpg", airport_name.replace(' ', "_"))
}

#[cfg(test)]
pub mod mock {
    use std::sync::Mutex;

    use super::*;

    pub const MOCK_BASE_URL: &str = "https://test-bucket.s3.amazonaws.com";

    #[derive(Debug, Clone, PartialEq)]
    pub struct PutRecord {
        pub key: String,
        pub body: Bytes,
        pub content_type: String,
    }

    /// In-memory store that records writes, optionally failing all of them
    #[derive(Default)]
    pub struct MockObjectStore {
        pub fail_uploads: bool,
        puts: Mutex<Vec<PutRecord>>,
    }

    impl MockObjectStore {
        pub fn failing() -> Self {
            Self {
                fail_uploads: true,
                ..Default::default()
            }
        }

        pub fn puts(&self) -> Vec<PutRecord> {
            self.puts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ObjectStore for MockObjectStore {
        async fn put_object(&self, key: &str, body: Bytes, content_type: &str) -> StorageResult<()> {
            if self.fail_uploads {
                return Err(StorageError::Upload("simulated outage".to_string()));
            }
            self.puts.lock().unwrap().push(PutRecord {
                key: key.to_string(),
                body,
                content_type: content_type.to_string(),
            });
            Ok(())
        }

        fn public_url(&self, key: &str) -> String {
            format!("{}/{}", MOCK_BASE_URL, key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key() {
        assert_eq!(
            object_key("Osmani International Airport"),
            "Osmani_International_Airport.jpg"
        );
        assert_eq!(object_key("DAC"), "DAC.jpg");
        assert_eq!(object_key("  two  spaces"), "__two__spaces.jpg");
    }
}
