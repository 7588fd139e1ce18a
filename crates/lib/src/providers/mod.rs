//! # Provider Clients
//!
//! The traits in [`sheets`] and [`storage`] are the seams where a provider
//! client is plugged in. The Google implementations issue the documented REST
//! calls with `reqwest`; tests substitute in-memory mocks.

pub mod sheets;
pub mod storage;

use crate::errors::HelperError;
use reqwest::{RequestBuilder, Response, Url};

/// Parses a configured API base URL such as `https://sheets.googleapis.com/v4`.
pub(crate) fn parse_base_url(base: &str) -> Result<Url, HelperError> {
    let url = Url::parse(base).map_err(|e| HelperError::InvalidBaseUrl(format!("{base}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(HelperError::InvalidBaseUrl(format!(
            "{base}: URL cannot carry a path"
        )));
    }
    Ok(url)
}

/// Appends `segments` to the path of `base`, percent-encoding each one as a
/// single segment (a `/` inside a segment becomes `%2F`).
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, HelperError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| HelperError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub(crate) fn authorize(request: RequestBuilder, access_token: Option<&str>) -> RequestBuilder {
    match access_token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

/// Turns a non-2xx response into `HelperError::Api`, keeping the body as sent.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, HelperError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(HelperError::Api {
        status: status.as_u16(),
        message,
    })
}
