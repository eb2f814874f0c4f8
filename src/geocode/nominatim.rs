use log::debug;
use reqwest::header::{ACCEPT, REFERER, USER_AGENT};

use crate::config::GeocoderSettings;
use crate::geocode::error::GeocodeError;
use crate::location::NominatimResponse;

/// Text-search client for a Nominatim-compatible endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    url: String,
    user_agent: String,
    referer: Option<String>,
    result_limit: u8
}

impl NominatimClient {
    pub fn new(settings: &GeocoderSettings) -> Result<NominatimClient, GeocodeError> {
        let client = reqwest::Client::builder().build()?;

        Ok(NominatimClient {
            client,
            url: settings.url.clone(),
            user_agent: settings.user_agent.clone(),
            referer: settings.referer.clone(),
            result_limit: settings.result_limit
        })
    }

    pub fn search_request(&self, query: &str) -> Result<reqwest::Request, GeocodeError> {
        let limit = self.result_limit.to_string();
        let mut builder = self.client
            .get(self.url.as_str())
            .query(&[
                ("q", query),
                ("format", "jsonv2"),
                ("limit", limit.as_str()),
                ("addressdetails", "1")
            ])
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, "application/json");

        if let Some(referer) = &self.referer {
            builder = builder.header(REFERER, referer.as_str());
        }

        Ok(builder.build()?)
    }

    /// Returns the best match for `query`, or `None` when the geocoder
    /// found nothing.
    pub async fn search(&self, query: String) -> Result<Option<NominatimResponse>, GeocodeError> {
        let request = self.search_request(&query)?;

        let results: Vec<NominatimResponse> = self.client
            .execute(request)
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("Geocoder returned {} result(s) for {:?}", results.len(), query);
        Ok(results.into_iter().next())
    }
}
