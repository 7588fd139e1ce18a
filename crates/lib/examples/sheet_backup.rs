//! # Sheet Backup Example
//!
//! Reads a sheet range and stores it as JSON in a bucket.
//!
//! ```sh
//! GOOGLE_ACCESS_TOKEN=$(gcloud auth print-access-token) \
//!   cargo run --example sheet_backup -- <spreadsheet-id> 'Sheet1!A1:Z' gs://my-bucket/backups/sheet1.json
//! ```

use anyhow::{bail, Result};
use gcloud_helpers::{
    files_in_bucket, get_config, get_sheet_data, in_bucket, to_bucket, CloudClients, ObjectRef,
    SheetRef, UploadSource,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [spreadsheet_id, range, destination] = args.as_slice() else {
        bail!("usage: sheet_backup <spreadsheet-id> <range> <gs://bucket/key>");
    };

    let config = get_config(None)?;
    let clients = CloudClients::from_config(&config)?;
    let sheet = SheetRef::new(spreadsheet_id, range);
    let object = ObjectRef::from_gs_uri(destination)?;

    let rows = get_sheet_data(clients.sheets.as_ref(), &sheet).await?;
    println!("Read {} row(s) from {sheet}", rows.len());

    if in_bucket(clients.storage.as_ref(), &object).await? {
        println!("{object} already exists and will be replaced");
    }

    let source = UploadSource::from_bytes(serde_json::to_vec_pretty(&rows)?)
        .with_content_type("application/json");
    let metadata = to_bucket(clients.storage.as_ref(), &object, source).await?;
    println!(
        "Stored {} byte(s) as {object}",
        metadata.size.as_deref().unwrap_or("?")
    );

    let folder = object.key.rsplit_once('/').map(|(dir, _)| format!("{dir}/"));
    for name in files_in_bucket(clients.storage.as_ref(), &object.bucket, folder.as_deref()).await? {
        println!("  {name}");
    }

    Ok(())
}
