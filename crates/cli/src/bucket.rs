use anyhow::Result;
use clap::{Parser, Subcommand};
use gcloud_helpers::providers::storage::ObjectStorage;
use gcloud_helpers::{
    delete_from_bucket, download_from_bucket, files_in_bucket, in_bucket, to_bucket, ObjectRef,
    UploadSource,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub struct BucketArgs {
    #[command(subcommand)]
    command: BucketCommands,
}

#[derive(Subcommand, Debug)]
enum BucketCommands {
    /// Upload a local file
    Upload(UploadArgs),
    /// Delete an object
    Delete(ObjectArgs),
    /// Print `true` if the object exists, `false` otherwise
    Exists(ObjectArgs),
    /// Download an object to a file, or to stdout
    Download(DownloadArgs),
    /// List object names, one per line
    List(ListArgs),
}

#[derive(Parser, Debug)]
struct ObjectArgs {
    /// The object, as `gs://bucket/key`
    #[arg(required = true, value_parser = parse_object)]
    object: ObjectRef,
}

#[derive(Parser, Debug)]
struct UploadArgs {
    /// Local file to upload
    #[arg(required = true)]
    file: PathBuf,
    /// Destination, as `gs://bucket/key`
    #[arg(required = true, value_parser = parse_object)]
    object: ObjectRef,
    /// Content type to store with the object
    #[arg(long)]
    content_type: Option<String>,
}

#[derive(Parser, Debug)]
struct DownloadArgs {
    /// The object, as `gs://bucket/key`
    #[arg(required = true, value_parser = parse_object)]
    object: ObjectRef,
    /// Write to this file instead of stdout
    #[arg(long, short)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// The bucket name
    #[arg(required = true)]
    bucket: String,
    /// Only list objects whose names start with this prefix
    #[arg(long)]
    prefix: Option<String>,
}

fn parse_object(uri: &str) -> Result<ObjectRef, String> {
    ObjectRef::from_gs_uri(uri).map_err(|e| e.to_string())
}

pub async fn handle_bucket(storage: &dyn ObjectStorage, args: &BucketArgs) -> Result<()> {
    match &args.command {
        BucketCommands::Upload(upload) => {
            let mut source = UploadSource::from_path(&upload.file);
            if let Some(content_type) = &upload.content_type {
                source = source.with_content_type(content_type);
            }
            let metadata = to_bucket(storage, &upload.object, source).await?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        BucketCommands::Delete(target) => {
            delete_from_bucket(storage, &target.object).await?;
            println!("Deleted {}", target.object);
        }
        BucketCommands::Exists(target) => {
            let exists = in_bucket(storage, &target.object).await?;
            println!("{exists}");
        }
        BucketCommands::Download(download) => {
            let data = download_from_bucket(storage, &download.object).await?;
            match &download.out {
                Some(path) => {
                    tokio::fs::write(path, &data).await?;
                    info!("Wrote {} byte(s) to {}", data.len(), path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&data)?;
                    stdout.flush()?;
                }
            }
        }
        BucketCommands::List(list) => {
            for name in files_in_bucket(storage, &list.bucket, list.prefix.as_deref()).await? {
                println!("{name}");
            }
        }
    }
    Ok(())
}
