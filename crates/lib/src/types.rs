use crate::errors::HelperError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A single sheet row. Cells are passed through exactly as the provider
/// returns or accepts them.
pub type Row = Vec<serde_json::Value>;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Identifies a range within a spreadsheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetRef {
    pub spreadsheet_id: String,
    /// A1 notation, e.g. `Sheet1!A1:C10`, or a bare tab name.
    pub range: String,
}

impl SheetRef {
    pub fn new(spreadsheet_id: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            range: range.into(),
        }
    }

    /// Builds a reference to `cells` on the tab named `tab`.
    ///
    /// Tab names containing anything other than ASCII alphanumerics or `_`
    /// are single-quoted, with embedded quotes doubled, as A1 notation
    /// requires. An empty `cells` addresses the whole tab.
    pub fn tab(spreadsheet_id: impl Into<String>, tab: &str, cells: &str) -> Self {
        let needs_quotes = tab.is_empty()
            || !tab.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        let tab = if needs_quotes {
            format!("'{}'", tab.replace('\'', "''"))
        } else {
            tab.to_string()
        };
        let range = if cells.is_empty() {
            tab
        } else {
            format!("{tab}!{cells}")
        };
        Self::new(spreadsheet_id, range)
    }
}

impl fmt::Display for SheetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.spreadsheet_id, self.range)
    }
}

/// Identifies an object within a bucket.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    pub bucket: String,
    pub key: String,
}

impl ObjectRef {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Parses a `gs://bucket/path/to/key` URI.
    pub fn from_gs_uri(uri: &str) -> Result<Self, HelperError> {
        let rest = uri.strip_prefix("gs://").ok_or_else(|| {
            HelperError::InvalidReference(format!("'{uri}' does not start with gs://"))
        })?;
        let (bucket, key) = rest.split_once('/').ok_or_else(|| {
            HelperError::InvalidReference(format!("'{uri}' has no object key"))
        })?;
        if bucket.is_empty() || key.is_empty() {
            return Err(HelperError::InvalidReference(format!(
                "'{uri}' must name both a bucket and a key"
            )));
        }
        Ok(Self::new(bucket, key))
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gs://{}/{}", self.bucket, self.key)
    }
}

#[derive(Clone, Debug)]
enum UploadBody {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// The content handed to `to_bucket`: a local file or an in-memory buffer.
#[derive(Clone, Debug)]
pub struct UploadSource {
    body: UploadBody,
    content_type: Option<String>,
}

impl UploadSource {
    /// Uploads the file at `path`. It is read when the upload runs.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            body: UploadBody::Path(path.into()),
            content_type: None,
        }
    }

    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self {
            body: UploadBody::Bytes(data.into()),
            content_type: None,
        }
    }

    /// Sets the object's content type. Defaults to `application/octet-stream`.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    /// Resolves the source into the bytes to send.
    pub async fn into_bytes(self) -> Result<Vec<u8>, HelperError> {
        match self.body {
            UploadBody::Path(path) => Ok(tokio::fs::read(&path).await?),
            UploadBody::Bytes(data) => Ok(data),
        }
    }
}

/// How the Sheets API interprets written values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueInputOption {
    /// Values are stored as-is.
    Raw,
    /// Values are parsed as if typed into the UI (formulas, dates, numbers).
    #[default]
    UserEntered,
}

impl ValueInputOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

impl fmt::Display for ValueInputOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a write, as reported by the Sheets API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default)]
    pub updated_range: Option<String>,
    #[serde(default)]
    pub updated_rows: u64,
    #[serde(default)]
    pub updated_columns: u64,
    #[serde(default)]
    pub updated_cells: u64,
}

/// Result of an append, as reported by the Sheets API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendResponse {
    #[serde(default)]
    pub spreadsheet_id: String,
    /// The table the rows were appended to, before the append.
    #[serde(default)]
    pub table_range: Option<String>,
    #[serde(default)]
    pub updates: UpdateResponse,
}

/// Object resource returned by the storage API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMetadata {
    pub name: String,
    #[serde(default)]
    pub bucket: String,
    /// Size in bytes. The API encodes it as a decimal string.
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub generation: Option<String>,
    #[serde(default)]
    pub md5_hash: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
}
