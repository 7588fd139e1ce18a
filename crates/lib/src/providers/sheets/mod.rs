pub mod google;

use crate::errors::HelperError;
use crate::types::{AppendResponse, Row, SheetRef, UpdateResponse};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A client for a cloud spreadsheet service.
///
/// Each method is one remote call. Implementations return the provider's
/// result and failures as-is.
#[async_trait]
pub trait SpreadsheetProvider: Send + Sync + Debug + DynClone {
    /// Reads the values of `sheet`, row by row. An empty range yields no rows.
    async fn get_values(&self, sheet: &SheetRef) -> Result<Vec<Row>, HelperError>;

    /// Appends `rows` after the last row of the table found in `sheet`.
    async fn append_rows(
        &self,
        sheet: &SheetRef,
        rows: Vec<Row>,
    ) -> Result<AppendResponse, HelperError>;

    /// Writes `rows` over the contents of `sheet`.
    async fn update_values(
        &self,
        sheet: &SheetRef,
        rows: Vec<Row>,
    ) -> Result<UpdateResponse, HelperError>;
}

dyn_clone::clone_trait_object!(SpreadsheetProvider);
