use crate::{
    errors::HelperError,
    providers::{authorize, endpoint, ensure_success, parse_base_url, storage::ObjectStorage},
    types::{ObjectMetadata, ObjectRef, UploadSource},
};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client as ReqwestClient, StatusCode, Url};
use serde::Deserialize;
use std::fmt::{self, Debug};
use tracing::{debug, info};

pub const DEFAULT_STORAGE_API_URL: &str = "https://storage.googleapis.com/storage/v1";
pub const DEFAULT_STORAGE_UPLOAD_URL: &str = "https://storage.googleapis.com/upload/storage/v1";

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ObjectList {
    #[serde(default)]
    items: Vec<ObjectMetadata>,
    #[serde(default)]
    next_page_token: Option<String>,
}

/// A provider for the Google Cloud Storage JSON API.
#[derive(Clone)]
pub struct GcsProvider {
    client: ReqwestClient,
    api_url: Url,
    upload_url: Url,
    access_token: Option<String>,
}

impl Debug for GcsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GcsProvider")
            .field("api_url", &self.api_url.as_str())
            .field("upload_url", &self.upload_url.as_str())
            .finish_non_exhaustive()
    }
}

impl GcsProvider {
    /// Creates a new `GcsProvider`.
    ///
    /// `api_url` serves metadata, download, delete and list calls; uploads go
    /// to the separate `upload_url` endpoint.
    pub fn new(
        api_url: &str,
        upload_url: &str,
        access_token: Option<String>,
    ) -> Result<Self, HelperError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(HelperError::ClientBuild)?;
        Ok(Self {
            client,
            api_url: parse_base_url(api_url)?,
            upload_url: parse_base_url(upload_url)?,
            access_token,
        })
    }

    fn object_url(&self, object: &ObjectRef) -> Result<Url, HelperError> {
        endpoint(&self.api_url, &["b", &object.bucket, "o", &object.key])
    }
}

#[async_trait]
impl ObjectStorage for GcsProvider {
    async fn upload(
        &self,
        object: &ObjectRef,
        source: UploadSource,
    ) -> Result<ObjectMetadata, HelperError> {
        let url = endpoint(&self.upload_url, &["b", &object.bucket, "o"])?;
        let content_type = source.content_type().to_string();
        let data = source.into_bytes().await?;
        info!("Uploading {} byte(s) to {object}", data.len());

        let request = self
            .client
            .post(url)
            .query(&[("uploadType", "media"), ("name", object.key.as_str())])
            .header(CONTENT_TYPE, content_type)
            .body(data);
        let response = authorize(request, self.access_token.as_deref())
            .send()
            .await
            .map_err(HelperError::Request)?;

        ensure_success(response)
            .await?
            .json()
            .await
            .map_err(HelperError::Deserialization)
    }

    async fn delete(&self, object: &ObjectRef) -> Result<(), HelperError> {
        let url = self.object_url(object)?;
        info!("Deleting {object}");

        let response = authorize(self.client.delete(url), self.access_token.as_deref())
            .send()
            .await
            .map_err(HelperError::Request)?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn exists(&self, object: &ObjectRef) -> Result<bool, HelperError> {
        let url = self.object_url(object)?;
        info!("Checking existence of {object}");

        let response = authorize(self.client.get(url), self.access_token.as_deref())
            .send()
            .await
            .map_err(HelperError::Request)?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("{object} not found");
            return Ok(false);
        }
        ensure_success(response).await?;
        Ok(true)
    }

    async fn download(&self, object: &ObjectRef) -> Result<Vec<u8>, HelperError> {
        let url = self.object_url(object)?;
        info!("Downloading {object}");

        let request = self.client.get(url).query(&[("alt", "media")]);
        let response = authorize(request, self.access_token.as_deref())
            .send()
            .await
            .map_err(HelperError::Request)?;

        let bytes = ensure_success(response)
            .await?
            .bytes()
            .await
            .map_err(HelperError::Request)?;
        Ok(bytes.to_vec())
    }

    async fn list(&self, bucket: &str, prefix: Option<&str>) -> Result<Vec<String>, HelperError> {
        let url = endpoint(&self.api_url, &["b", bucket, "o"])?;
        info!("Listing objects in bucket '{bucket}' (prefix: {prefix:?})");

        let mut names = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut request = self.client.get(url.clone());
            if let Some(prefix) = prefix {
                request = request.query(&[("prefix", prefix)]);
            }
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }
            let response = authorize(request, self.access_token.as_deref())
                .send()
                .await
                .map_err(HelperError::Request)?;

            let page: ObjectList = ensure_success(response)
                .await?
                .json()
                .await
                .map_err(HelperError::Deserialization)?;
            names.extend(page.items.into_iter().map(|item| item.name));

            match page.next_page_token {
                Some(token) if !token.is_empty() => {
                    debug!("Fetching next page of '{bucket}'");
                    page_token = Some(token);
                }
                _ => break,
            }
        }
        Ok(names)
    }
}
