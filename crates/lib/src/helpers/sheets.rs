use crate::{
    errors::HelperError,
    providers::sheets::SpreadsheetProvider,
    types::{AppendResponse, Row, SheetRef, UpdateResponse},
};
use tracing::debug;

/// Reads and returns the current values of a sheet range.
pub async fn get_sheet_data(
    sheets: &dyn SpreadsheetProvider,
    sheet: &SheetRef,
) -> Result<Vec<Row>, HelperError> {
    debug!(%sheet, "get_sheet_data");
    sheets.get_values(sheet).await
}

/// Appends `rows` to a sheet. Fails if the spreadsheet is inaccessible.
pub async fn add_sheet_rows(
    sheets: &dyn SpreadsheetProvider,
    sheet: &SheetRef,
    rows: Vec<Row>,
) -> Result<AppendResponse, HelperError> {
    debug!(%sheet, rows = rows.len(), "add_sheet_rows");
    sheets.append_rows(sheet, rows).await
}

/// Replaces the contents of a sheet range with `rows`.
pub async fn overwrite_sheet_data(
    sheets: &dyn SpreadsheetProvider,
    sheet: &SheetRef,
    rows: Vec<Row>,
) -> Result<UpdateResponse, HelperError> {
    debug!(%sheet, rows = rows.len(), "overwrite_sheet_data");
    sheets.update_values(sheet, rows).await
}
