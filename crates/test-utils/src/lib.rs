//! # Test Utilities
//!
//! In-memory stand-ins for the provider clients. Each mock records every call
//! it receives, so tests can assert that a helper made exactly one call and
//! passed its arguments through untouched.

use async_trait::async_trait;
use gcloud_helpers::providers::sheets::SpreadsheetProvider;
use gcloud_helpers::providers::storage::ObjectStorage;
use gcloud_helpers::{
    AppendResponse, HelperError, ObjectMetadata, ObjectRef, Row, SheetRef, UpdateResponse,
    UploadSource,
};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, Once};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn not_found(what: &str) -> HelperError {
    HelperError::Api {
        status: 404,
        message: format!("No such object: {what}"),
    }
}

/// A failure the mocks replay on every call once programmed.
#[derive(Clone, Debug)]
struct ProgrammedFailure {
    status: u16,
    message: String,
}

impl ProgrammedFailure {
    fn to_error(&self) -> HelperError {
        HelperError::Api {
            status: self.status,
            message: self.message.clone(),
        }
    }
}

// --- Mock Spreadsheet Provider ---

#[derive(Clone, Debug, PartialEq)]
pub enum SheetCall {
    GetValues(SheetRef),
    AppendRows(SheetRef, Vec<Row>),
    UpdateValues(SheetRef, Vec<Row>),
}

#[derive(Clone, Debug, Default)]
pub struct MockSpreadsheetProvider {
    spreadsheets: Arc<Mutex<HashSet<String>>>,
    values: Arc<Mutex<HashMap<(String, String), Vec<Row>>>>,
    calls: Arc<Mutex<Vec<SheetCall>>>,
    failure: Arc<Mutex<Option<ProgrammedFailure>>>,
}

impl MockSpreadsheetProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `spreadsheet_id` accessible. Calls against any other id fail with 404.
    pub fn add_spreadsheet(&self, spreadsheet_id: &str) {
        self.spreadsheets
            .lock()
            .unwrap()
            .insert(spreadsheet_id.to_string());
    }

    /// Seeds the values of a range, making its spreadsheet accessible.
    pub fn set_values(&self, sheet: &SheetRef, rows: Vec<Row>) {
        self.add_spreadsheet(&sheet.spreadsheet_id);
        self.values.lock().unwrap().insert(
            (sheet.spreadsheet_id.clone(), sheet.range.clone()),
            rows,
        );
    }

    pub fn values(&self, sheet: &SheetRef) -> Option<Vec<Row>> {
        self.values
            .lock()
            .unwrap()
            .get(&(sheet.spreadsheet_id.clone(), sheet.range.clone()))
            .cloned()
    }

    /// Makes every subsequent call fail with the given provider status and body.
    pub fn fail_with(&self, status: u16, message: &str) {
        *self.failure.lock().unwrap() = Some(ProgrammedFailure {
            status,
            message: message.to_string(),
        });
    }

    pub fn get_calls(&self) -> Vec<SheetCall> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self, sheet: &SheetRef) -> Result<(), HelperError> {
        if let Some(failure) = self.failure.lock().unwrap().as_ref() {
            return Err(failure.to_error());
        }
        if !self
            .spreadsheets
            .lock()
            .unwrap()
            .contains(&sheet.spreadsheet_id)
        {
            return Err(HelperError::Api {
                status: 404,
                message: "Requested entity was not found.".to_string(),
            });
        }
        Ok(())
    }
}

fn update_summary(sheet: &SheetRef, rows: &[Row]) -> UpdateResponse {
    let updated_cells = rows.iter().map(|row| row.len() as u64).sum();
    UpdateResponse {
        spreadsheet_id: sheet.spreadsheet_id.clone(),
        updated_range: Some(sheet.range.clone()),
        updated_rows: rows.len() as u64,
        updated_columns: rows.iter().map(|row| row.len() as u64).max().unwrap_or(0),
        updated_cells,
    }
}

#[async_trait]
impl SpreadsheetProvider for MockSpreadsheetProvider {
    async fn get_values(&self, sheet: &SheetRef) -> Result<Vec<Row>, HelperError> {
        self.calls
            .lock()
            .unwrap()
            .push(SheetCall::GetValues(sheet.clone()));
        self.check(sheet)?;
        Ok(self.values(sheet).unwrap_or_default())
    }

    async fn append_rows(
        &self,
        sheet: &SheetRef,
        rows: Vec<Row>,
    ) -> Result<AppendResponse, HelperError> {
        self.calls
            .lock()
            .unwrap()
            .push(SheetCall::AppendRows(sheet.clone(), rows.clone()));
        self.check(sheet)?;

        let summary = update_summary(sheet, &rows);
        self.values
            .lock()
            .unwrap()
            .entry((sheet.spreadsheet_id.clone(), sheet.range.clone()))
            .or_default()
            .extend(rows);
        Ok(AppendResponse {
            spreadsheet_id: sheet.spreadsheet_id.clone(),
            table_range: Some(sheet.range.clone()),
            updates: summary,
        })
    }

    async fn update_values(
        &self,
        sheet: &SheetRef,
        rows: Vec<Row>,
    ) -> Result<UpdateResponse, HelperError> {
        self.calls
            .lock()
            .unwrap()
            .push(SheetCall::UpdateValues(sheet.clone(), rows.clone()));
        self.check(sheet)?;

        let summary = update_summary(sheet, &rows);
        self.values
            .lock()
            .unwrap()
            .insert((sheet.spreadsheet_id.clone(), sheet.range.clone()), rows);
        Ok(summary)
    }
}

// --- Mock Object Storage ---

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageCall {
    Upload(ObjectRef),
    Delete(ObjectRef),
    Exists(ObjectRef),
    Download(ObjectRef),
    List {
        bucket: String,
        prefix: Option<String>,
    },
}

#[derive(Clone, Debug, Default)]
pub struct MockObjectStorage {
    objects: Arc<Mutex<BTreeMap<(String, String), (Vec<u8>, String)>>>,
    calls: Arc<Mutex<Vec<StorageCall>>>,
    failure: Arc<Mutex<Option<ProgrammedFailure>>>,
}

impl MockObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, object: &ObjectRef, data: &[u8]) {
        self.objects.lock().unwrap().insert(
            (object.bucket.clone(), object.key.clone()),
            (data.to_vec(), "application/octet-stream".to_string()),
        );
    }

    pub fn get(&self, object: &ObjectRef) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(&(object.bucket.clone(), object.key.clone()))
            .map(|(data, _)| data.clone())
    }

    /// Makes every subsequent call fail with the given provider status and body.
    pub fn fail_with(&self, status: u16, message: &str) {
        *self.failure.lock().unwrap() = Some(ProgrammedFailure {
            status,
            message: message.to_string(),
        });
    }

    pub fn get_calls(&self) -> Vec<StorageCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: StorageCall) -> Result<(), HelperError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().as_ref() {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ObjectStorage for MockObjectStorage {
    async fn upload(
        &self,
        object: &ObjectRef,
        source: UploadSource,
    ) -> Result<ObjectMetadata, HelperError> {
        self.record(StorageCall::Upload(object.clone()))?;
        let content_type = source.content_type().to_string();
        let data = source.into_bytes().await?;
        let metadata = ObjectMetadata {
            name: object.key.clone(),
            bucket: object.bucket.clone(),
            size: Some(data.len().to_string()),
            content_type: Some(content_type.clone()),
            ..Default::default()
        };
        self.objects.lock().unwrap().insert(
            (object.bucket.clone(), object.key.clone()),
            (data, content_type),
        );
        Ok(metadata)
    }

    async fn delete(&self, object: &ObjectRef) -> Result<(), HelperError> {
        self.record(StorageCall::Delete(object.clone()))?;
        self.objects
            .lock()
            .unwrap()
            .remove(&(object.bucket.clone(), object.key.clone()))
            .map(|_| ())
            .ok_or_else(|| not_found(&object.to_string()))
    }

    async fn exists(&self, object: &ObjectRef) -> Result<bool, HelperError> {
        self.record(StorageCall::Exists(object.clone()))?;
        Ok(self
            .objects
            .lock()
            .unwrap()
            .contains_key(&(object.bucket.clone(), object.key.clone())))
    }

    async fn download(&self, object: &ObjectRef) -> Result<Vec<u8>, HelperError> {
        self.record(StorageCall::Download(object.clone()))?;
        self.get(object)
            .ok_or_else(|| not_found(&object.to_string()))
    }

    async fn list(&self, bucket: &str, prefix: Option<&str>) -> Result<Vec<String>, HelperError> {
        self.record(StorageCall::List {
            bucket: bucket.to_string(),
            prefix: prefix.map(String::from),
        })?;
        Ok(self
            .objects
            .lock()
            .unwrap()
            .keys()
            .filter(|(b, key)| b == bucket && prefix.map_or(true, |p| key.starts_with(p)))
            .map(|(_, key)| key.clone())
            .collect())
    }
}
