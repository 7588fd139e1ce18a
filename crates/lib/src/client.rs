use crate::config::HelperConfig;
use crate::errors::HelperError;
use crate::providers::sheets::{google::GoogleSheetsProvider, SpreadsheetProvider};
use crate::providers::storage::{gcs::GcsProvider, ObjectStorage};
use crate::types::ValueInputOption;

/// The provider clients the helpers run against.
#[derive(Clone, Debug)]
pub struct CloudClients {
    pub sheets: Box<dyn SpreadsheetProvider>,
    pub storage: Box<dyn ObjectStorage>,
}

impl CloudClients {
    /// Builds the Google providers described by `config`.
    pub fn from_config(config: &HelperConfig) -> Result<Self, HelperError> {
        CloudClientsBuilder::from_config(config).build()
    }
}

/// A builder for creating `CloudClients` instances.
///
/// Either provider can be replaced with a custom implementation; any provider
/// left unset is built from the configured endpoints.
#[derive(Default)]
pub struct CloudClientsBuilder {
    config: HelperConfig,
    sheets: Option<Box<dyn SpreadsheetProvider>>,
    storage: Option<Box<dyn ObjectStorage>>,
}

impl CloudClientsBuilder {
    /// Creates a new `CloudClientsBuilder` pointing at the public Google endpoints.
    ///
    /// # Examples
    ///
    /// ```
    /// use gcloud_helpers::CloudClientsBuilder;
    ///
    /// let clients = CloudClientsBuilder::new()
    ///     .access_token("ya29.token".to_string())
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &HelperConfig) -> Self {
        Self {
            config: config.clone(),
            ..Self::default()
        }
    }

    pub fn sheets_api_url(mut self, url: String) -> Self {
        self.config.sheets_api_url = url;
        self
    }

    pub fn storage_api_url(mut self, url: String) -> Self {
        self.config.storage_api_url = url;
        self
    }

    pub fn storage_upload_url(mut self, url: String) -> Self {
        self.config.storage_upload_url = url;
        self
    }

    pub fn access_token(mut self, token: String) -> Self {
        self.config.access_token = Some(token);
        self
    }

    pub fn value_input_option(mut self, option: ValueInputOption) -> Self {
        self.config.value_input_option = option;
        self
    }

    /// Uses `provider` instead of the Google Sheets client.
    pub fn sheets_provider(mut self, provider: Box<dyn SpreadsheetProvider>) -> Self {
        self.sheets = Some(provider);
        self
    }

    /// Uses `provider` instead of the Cloud Storage client.
    pub fn storage_provider(mut self, provider: Box<dyn ObjectStorage>) -> Self {
        self.storage = Some(provider);
        self
    }

    /// Builds the `CloudClients`.
    ///
    /// Fails if a configured base URL cannot be parsed or the HTTP client
    /// cannot be created.
    pub fn build(self) -> Result<CloudClients, HelperError> {
        let sheets = match self.sheets {
            Some(provider) => provider,
            None => Box::new(
                GoogleSheetsProvider::new(
                    &self.config.sheets_api_url,
                    self.config.access_token.clone(),
                )?
                .with_value_input_option(self.config.value_input_option),
            ),
        };
        let storage = match self.storage {
            Some(provider) => provider,
            None => Box::new(GcsProvider::new(
                &self.config.storage_api_url,
                &self.config.storage_upload_url,
                self.config.access_token.clone(),
            )?),
        };
        Ok(CloudClients { sheets, storage })
    }
}
