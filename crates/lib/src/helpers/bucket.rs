use crate::{
    errors::HelperError,
    providers::storage::ObjectStorage,
    types::{ObjectMetadata, ObjectRef, UploadSource},
};
use tracing::debug;

/// Uploads a local file or buffer to a bucket.
pub async fn to_bucket(
    storage: &dyn ObjectStorage,
    object: &ObjectRef,
    source: UploadSource,
) -> Result<ObjectMetadata, HelperError> {
    debug!(%object, "to_bucket");
    storage.upload(object, source).await
}

/// Deletes an object. Fails if it does not exist or access is denied.
pub async fn delete_from_bucket(
    storage: &dyn ObjectStorage,
    object: &ObjectRef,
) -> Result<(), HelperError> {
    debug!(%object, "delete_from_bucket");
    storage.delete(object).await
}

pub async fn in_bucket(storage: &dyn ObjectStorage, object: &ObjectRef) -> Result<bool, HelperError> {
    debug!(%object, "in_bucket");
    storage.exists(object).await
}

/// Fetches the content of an object.
pub async fn download_from_bucket(
    storage: &dyn ObjectStorage,
    object: &ObjectRef,
) -> Result<Vec<u8>, HelperError> {
    debug!(%object, "download_from_bucket");
    storage.download(object).await
}

/// Lists the object names in `bucket`, optionally only those under `prefix`.
pub async fn files_in_bucket(
    storage: &dyn ObjectStorage,
    bucket: &str,
    prefix: Option<&str>,
) -> Result<Vec<String>, HelperError> {
    debug!(bucket, ?prefix, "files_in_bucket");
    storage.list(bucket, prefix).await
}
