//! # gcloud-helpers
//!
//! One-call helpers over Google Sheets and Google Cloud Storage.
//!
//! Every helper takes the provider client to use and issues a single remote
//! call on it. Results and failures come back exactly as the provider gave
//! them: no retries, no caching, no error translation.
//!
//! ```no_run
//! use gcloud_helpers::{get_sheet_data, in_bucket, CloudClients, HelperConfig, ObjectRef, SheetRef};
//!
//! # async fn run() -> Result<(), gcloud_helpers::HelperError> {
//! let clients = CloudClients::from_config(&HelperConfig::default())?;
//! let rows = get_sheet_data(clients.sheets.as_ref(), &SheetRef::new("sheet-id", "Sheet1!A1:C10")).await?;
//! let present = in_bucket(clients.storage.as_ref(), &ObjectRef::new("bucket", "report.csv")).await?;
//! # let _ = (rows, present);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod helpers;
pub mod providers;
pub mod types;

pub use self::client::{CloudClients, CloudClientsBuilder};
// `self::` keeps the module distinct from the `config` crate.
pub use self::config::{get_config, ConfigError, HelperConfig};
pub use self::errors::HelperError;
pub use self::types::{
    AppendResponse, ObjectMetadata, ObjectRef, Row, SheetRef, UpdateResponse, UploadSource,
    ValueInputOption,
};

pub use helpers::bucket::{
    delete_from_bucket, download_from_bucket, files_in_bucket, in_bucket, to_bucket,
};
pub use helpers::sheets::{add_sheet_rows, get_sheet_data, overwrite_sheet_data};
