use crate::{
    errors::HelperError,
    providers::{authorize, endpoint, ensure_success, parse_base_url, sheets::SpreadsheetProvider},
    types::{AppendResponse, Row, SheetRef, UpdateResponse, ValueInputOption},
};
use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Url};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use tracing::info;

pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4";

// --- Sheets v4 request and response structures ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRangeBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<&'a str>,
    major_dimension: &'static str,
    values: &'a [Row],
}

#[derive(Deserialize, Debug)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Row>,
}

// --- Google Sheets Provider implementation ---

/// A provider for the Google Sheets v4 REST API.
#[derive(Clone)]
pub struct GoogleSheetsProvider {
    client: ReqwestClient,
    api_url: Url,
    access_token: Option<String>,
    value_input_option: ValueInputOption,
}

impl Debug for GoogleSheetsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleSheetsProvider")
            .field("api_url", &self.api_url.as_str())
            .field("value_input_option", &self.value_input_option)
            .finish_non_exhaustive()
    }
}

impl GoogleSheetsProvider {
    /// Creates a new `GoogleSheetsProvider` talking to `api_url`.
    pub fn new(api_url: &str, access_token: Option<String>) -> Result<Self, HelperError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(HelperError::ClientBuild)?;
        Ok(Self {
            client,
            api_url: parse_base_url(api_url)?,
            access_token,
            value_input_option: ValueInputOption::default(),
        })
    }

    /// Sets how written values are interpreted.
    pub fn with_value_input_option(mut self, option: ValueInputOption) -> Self {
        self.value_input_option = option;
        self
    }

    fn values_url(&self, sheet: &SheetRef, range_segment: &str) -> Result<Url, HelperError> {
        endpoint(
            &self.api_url,
            &["spreadsheets", &sheet.spreadsheet_id, "values", range_segment],
        )
    }
}

#[async_trait]
impl SpreadsheetProvider for GoogleSheetsProvider {
    async fn get_values(&self, sheet: &SheetRef) -> Result<Vec<Row>, HelperError> {
        let url = self.values_url(sheet, &sheet.range)?;
        info!("Reading sheet values from: {url}");

        let request = self.client.get(url).query(&[("majorDimension", "ROWS")]);
        let response = authorize(request, self.access_token.as_deref())
            .send()
            .await
            .map_err(HelperError::Request)?;

        let value_range: ValueRange = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(HelperError::Deserialization)?;
        Ok(value_range.values)
    }

    async fn append_rows(
        &self,
        sheet: &SheetRef,
        rows: Vec<Row>,
    ) -> Result<AppendResponse, HelperError> {
        let url = self.values_url(sheet, &format!("{}:append", sheet.range))?;
        info!("Appending {} row(s) to sheet: {url}", rows.len());

        let body = ValueRangeBody {
            range: None,
            major_dimension: "ROWS",
            values: &rows,
        };
        let request = self
            .client
            .post(url)
            .query(&[
                ("valueInputOption", self.value_input_option.as_str()),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&body);
        let response = authorize(request, self.access_token.as_deref())
            .send()
            .await
            .map_err(HelperError::Request)?;

        ensure_success(response)
            .await?
            .json()
            .await
            .map_err(HelperError::Deserialization)
    }

    async fn update_values(
        &self,
        sheet: &SheetRef,
        rows: Vec<Row>,
    ) -> Result<UpdateResponse, HelperError> {
        let url = self.values_url(sheet, &sheet.range)?;
        info!("Overwriting sheet range with {} row(s): {url}", rows.len());

        let body = ValueRangeBody {
            range: Some(&sheet.range),
            major_dimension: "ROWS",
            values: &rows,
        };
        let request = self
            .client
            .put(url)
            .query(&[("valueInputOption", self.value_input_option.as_str())])
            .json(&body);
        let response = authorize(request, self.access_token.as_deref())
            .send()
            .await
            .map_err(HelperError::Request)?;

        ensure_success(response)
            .await?
            .json()
            .await
            .map_err(HelperError::Deserialization)
    }
}
