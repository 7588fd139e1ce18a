#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Builds the real Google providers against a local mock server.

use gcloud_helpers::providers::sheets::google::GoogleSheetsProvider;
use gcloud_helpers::providers::storage::gcs::GcsProvider;
use gcloud_helpers::ValueInputOption;

pub use gcloud_helpers_test_utils::setup_tracing;

pub const TEST_TOKEN: &str = "test-access-token";

/// A Sheets provider whose API root is `{base_url}/v4`.
pub fn sheets_provider(base_url: &str) -> GoogleSheetsProvider {
    GoogleSheetsProvider::new(&format!("{base_url}/v4"), Some(TEST_TOKEN.to_string()))
        .expect("Failed to create GoogleSheetsProvider")
        .with_value_input_option(ValueInputOption::UserEntered)
}

/// A storage provider rooted at `{base_url}/storage/v1` and `{base_url}/upload/storage/v1`.
pub fn storage_provider(base_url: &str) -> GcsProvider {
    GcsProvider::new(
        &format!("{base_url}/storage/v1"),
        &format!("{base_url}/upload/storage/v1"),
        Some(TEST_TOKEN.to_string()),
    )
    .expect("Failed to create GcsProvider")
}
