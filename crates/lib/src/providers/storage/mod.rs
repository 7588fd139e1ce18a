pub mod gcs;

use crate::errors::HelperError;
use crate::types::{ObjectMetadata, ObjectRef, UploadSource};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A client for a cloud object-storage service.
#[async_trait]
pub trait ObjectStorage: Send + Sync + Debug + DynClone {
    /// Uploads `source` as `object`, replacing any existing object.
    async fn upload(
        &self,
        object: &ObjectRef,
        source: UploadSource,
    ) -> Result<ObjectMetadata, HelperError>;

    async fn delete(&self, object: &ObjectRef) -> Result<(), HelperError>;

    /// Returns whether `object` exists. Only a not-found answer maps to
    /// `false`; every other failure is returned as an error.
    async fn exists(&self, object: &ObjectRef) -> Result<bool, HelperError>;

    async fn download(&self, object: &ObjectRef) -> Result<Vec<u8>, HelperError>;

    /// Lists the names of all objects in `bucket`, optionally restricted to
    /// those starting with `prefix`.
    async fn list(&self, bucket: &str, prefix: Option<&str>) -> Result<Vec<String>, HelperError>;
}

dyn_clone::clone_trait_object!(ObjectStorage);
