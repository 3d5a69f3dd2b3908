use tracing::instrument;

use crate::{error::Result, http, locations::model::*};

/// Provides location reference data for the sign-up form.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: http::Client,
}

impl Client {
    pub(crate) fn new(http_client: http::Client) -> Self {
        Self { http_client }
    }

    /// All countries with their short names and dial codes.
    #[instrument(skip(self))]
    pub async fn countries(&self) -> Result<CountryList> {
        self.http_client
            .get("/locations/countries")
            .await?
            .json()
            .await
    }
}
