//! # Facade Tests
//!
//! Checks that every exported helper makes exactly one call on the provider it
//! is given and returns the provider's answer, or its failure, untouched.

use anyhow::Result;
use gcloud_helpers::{
    add_sheet_rows, delete_from_bucket, download_from_bucket, files_in_bucket, get_sheet_data,
    in_bucket, overwrite_sheet_data, to_bucket, CloudClientsBuilder, HelperError, ObjectRef,
    SheetRef, UploadSource,
};
use gcloud_helpers_test_utils::{
    setup_tracing, MockObjectStorage, MockSpreadsheetProvider, SheetCall, StorageCall,
};
use serde_json::json;

#[test]
fn test_all_helpers_are_exported_from_the_crate_root() {
    // Referencing each item by path is enough: a missing or renamed export
    // fails to compile.
    let names = [
        std::any::type_name_of_val(&gcloud_helpers::add_sheet_rows),
        std::any::type_name_of_val(&gcloud_helpers::overwrite_sheet_data),
        std::any::type_name_of_val(&gcloud_helpers::get_sheet_data),
        std::any::type_name_of_val(&gcloud_helpers::to_bucket),
        std::any::type_name_of_val(&gcloud_helpers::delete_from_bucket),
        std::any::type_name_of_val(&gcloud_helpers::in_bucket),
        std::any::type_name_of_val(&gcloud_helpers::download_from_bucket),
        std::any::type_name_of_val(&gcloud_helpers::files_in_bucket),
    ];
    assert_eq!(names.len(), 8);
    for (name, expected) in names.iter().zip([
        "add_sheet_rows",
        "overwrite_sheet_data",
        "get_sheet_data",
        "to_bucket",
        "delete_from_bucket",
        "in_bucket",
        "download_from_bucket",
        "files_in_bucket",
    ]) {
        assert!(name.ends_with(expected), "{name} does not name {expected}");
    }
}

// --- Spreadsheet helpers ---

#[tokio::test]
async fn test_get_sheet_data_delegates_once() -> Result<()> {
    setup_tracing();
    let sheets = MockSpreadsheetProvider::new();
    let sheet = SheetRef::new("sheet-1", "Orders!A1:B2");
    let rows = vec![vec![json!("id"), json!("total")], vec![json!(1), json!(9.5)]];
    sheets.set_values(&sheet, rows.clone());

    let result = get_sheet_data(&sheets, &sheet).await?;

    assert_eq!(result, rows);
    assert_eq!(sheets.get_calls(), vec![SheetCall::GetValues(sheet)]);
    Ok(())
}

#[tokio::test]
async fn test_add_sheet_rows_delegates_once() -> Result<()> {
    setup_tracing();
    let sheets = MockSpreadsheetProvider::new();
    let sheet = SheetRef::new("sheet-1", "Orders");
    sheets.set_values(&sheet, vec![vec![json!("id"), json!("total")]]);
    let new_rows = vec![vec![json!(2), json!(3.25)], vec![json!(3), json!(1)]];

    let response = add_sheet_rows(&sheets, &sheet, new_rows.clone()).await?;

    assert_eq!(response.updates.updated_rows, 2);
    assert_eq!(response.updates.updated_cells, 4);
    assert_eq!(
        sheets.get_calls(),
        vec![SheetCall::AppendRows(sheet.clone(), new_rows)]
    );
    assert_eq!(sheets.values(&sheet).map(|rows| rows.len()), Some(3));
    Ok(())
}

#[tokio::test]
async fn test_add_sheet_rows_to_inaccessible_spreadsheet_fails() {
    setup_tracing();
    let sheets = MockSpreadsheetProvider::new();

    let err = add_sheet_rows(
        &sheets,
        &SheetRef::new("no-such-sheet", "Sheet1"),
        vec![vec![json!("x")]],
    )
    .await
    .unwrap_err();

    assert!(err.is_not_found(), "got {err:?}");
    assert_eq!(sheets.get_calls().len(), 1);
}

#[tokio::test]
async fn test_overwrite_sheet_data_replaces_contents() -> Result<()> {
    setup_tracing();
    let sheets = MockSpreadsheetProvider::new();
    let sheet = SheetRef::new("sheet-1", "Summary!A1:A3");
    sheets.set_values(&sheet, vec![vec![json!("old")]; 3]);
    let replacement = vec![vec![json!("new")]];

    let response = overwrite_sheet_data(&sheets, &sheet, replacement.clone()).await?;

    assert_eq!(response.updated_rows, 1);
    assert_eq!(sheets.values(&sheet), Some(replacement.clone()));
    assert_eq!(
        sheets.get_calls(),
        vec![SheetCall::UpdateValues(sheet, replacement)]
    );
    Ok(())
}

#[tokio::test]
async fn test_sheet_provider_failure_propagates_unchanged() {
    setup_tracing();
    let sheets = MockSpreadsheetProvider::new();
    let sheet = SheetRef::new("sheet-1", "Sheet1");
    sheets.add_spreadsheet("sheet-1");
    sheets.fail_with(503, "backendError");

    let err = get_sheet_data(&sheets, &sheet).await.unwrap_err();

    match err {
        HelperError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "backendError");
        }
        other => panic!("Expected the provider's error, got {other:?}"),
    }
    assert_eq!(sheets.get_calls().len(), 1, "No retry is expected");
}

// --- Bucket helpers ---

#[tokio::test]
async fn test_to_bucket_delegates_once() -> Result<()> {
    setup_tracing();
    let storage = MockObjectStorage::new();
    let object = ObjectRef::new("media", "clips/intro.txt");

    let metadata = to_bucket(
        &storage,
        &object,
        UploadSource::from_bytes(b"hello".to_vec()).with_content_type("text/plain"),
    )
    .await?;

    assert_eq!(metadata.name, "clips/intro.txt");
    assert_eq!(metadata.size.as_deref(), Some("5"));
    assert_eq!(metadata.content_type.as_deref(), Some("text/plain"));
    assert_eq!(storage.get(&object), Some(b"hello".to_vec()));
    assert_eq!(storage.get_calls(), vec![StorageCall::Upload(object)]);
    Ok(())
}

#[tokio::test]
async fn test_to_bucket_permission_error_propagates() {
    setup_tracing();
    let storage = MockObjectStorage::new();
    storage.fail_with(403, "does not have storage.objects.create access");

    let err = to_bucket(
        &storage,
        &ObjectRef::new("locked", "a.txt"),
        UploadSource::from_bytes(b"a".to_vec()),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(storage.get_calls().len(), 1);
}

#[tokio::test]
async fn test_delete_from_bucket_delegates_once() -> Result<()> {
    setup_tracing();
    let storage = MockObjectStorage::new();
    let object = ObjectRef::new("media", "old.txt");
    storage.insert(&object, b"bye");

    delete_from_bucket(&storage, &object).await?;

    assert_eq!(storage.get(&object), None);
    assert_eq!(storage.get_calls(), vec![StorageCall::Delete(object)]);
    Ok(())
}

#[tokio::test]
async fn test_delete_from_bucket_not_found() {
    setup_tracing();
    let storage = MockObjectStorage::new();

    let err = delete_from_bucket(&storage, &ObjectRef::new("media", "nope.txt"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_in_bucket_delegates_once() -> Result<()> {
    setup_tracing();
    let storage = MockObjectStorage::new();
    let object = ObjectRef::new("media", "here.txt");
    storage.insert(&object, b"1");

    assert!(in_bucket(&storage, &object).await?);
    assert_eq!(storage.get_calls(), vec![StorageCall::Exists(object)]);
    Ok(())
}

#[tokio::test]
async fn test_download_from_bucket_delegates_once() -> Result<()> {
    setup_tracing();
    let storage = MockObjectStorage::new();
    let object = ObjectRef::new("media", "data.bin");
    storage.insert(&object, &[1, 2, 3]);

    let data = download_from_bucket(&storage, &object).await?;

    assert_eq!(data, vec![1, 2, 3]);
    assert_eq!(storage.get_calls(), vec![StorageCall::Download(object)]);
    Ok(())
}

#[tokio::test]
async fn test_files_in_bucket_delegates_once() -> Result<()> {
    setup_tracing();
    let storage = MockObjectStorage::new();
    storage.insert(&ObjectRef::new("media", "a/1.txt"), b"");
    storage.insert(&ObjectRef::new("media", "a/2.txt"), b"");
    storage.insert(&ObjectRef::new("media", "b/3.txt"), b"");
    storage.insert(&ObjectRef::new("other", "a/4.txt"), b"");

    let names = files_in_bucket(&storage, "media", Some("a/")).await?;

    assert_eq!(names, vec!["a/1.txt", "a/2.txt"]);
    assert_eq!(
        storage.get_calls(),
        vec![StorageCall::List {
            bucket: "media".to_string(),
            prefix: Some("a/".to_string()),
        }]
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_object_download_is_not_an_empty_success() -> Result<()> {
    // --- 1. Arrange ---
    setup_tracing();
    let storage = MockObjectStorage::new();
    let object = ObjectRef::new("b", "missing.txt");

    // --- 2. Act ---
    let present = in_bucket(&storage, &object).await?;
    let download = download_from_bucket(&storage, &object).await;

    // --- 3. Assert ---
    assert!(!present);
    match download {
        Err(err) => assert!(err.is_not_found(), "got {err:?}"),
        Ok(data) => panic!("Expected not-found, got {} byte(s)", data.len()),
    }
    assert_eq!(
        storage.get_calls(),
        vec![
            StorageCall::Exists(object.clone()),
            StorageCall::Download(object)
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_builder_accepts_substituted_providers() -> Result<()> {
    setup_tracing();
    let sheets = MockSpreadsheetProvider::new();
    let storage = MockObjectStorage::new();
    let object = ObjectRef::new("media", "x.txt");
    storage.insert(&object, b"x");

    let clients = CloudClientsBuilder::new()
        .sheets_provider(Box::new(sheets.clone()))
        .storage_provider(Box::new(storage.clone()))
        .build()?;

    assert!(in_bucket(clients.storage.as_ref(), &object).await?);
    // The clone shares state with the original mock.
    assert_eq!(storage.get_calls().len(), 1);
    assert!(get_sheet_data(clients.sheets.as_ref(), &SheetRef::new("unknown", "A1"))
        .await
        .is_err());
    assert_eq!(sheets.get_calls().len(), 1);
    Ok(())
}
