//! HTTP client for the classification, soil, footprint and nearby-center backend.

use crate::config::Config;
use crate::errors::ClientError;
use crate::models::{
    ErrorBody, FootprintReport, FootprintRequest, NearbyQuery, NearbyReport, Prediction,
    SoilReport, SoilRequest, Upload,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(Client::new(), base_url)
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_http(builder.build()?, config.backend_url.clone()))
    }

    fn with_http(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// `POST /predict` with the image under the multipart field `file`.
    pub async fn predict(&self, upload: Upload) -> Result<Prediction, ClientError> {
        let mut part = Part::bytes(upload.bytes).file_name(upload.file_name);
        if let Some(content_type) = upload.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.endpoint("predict"))
            .multipart(form)
            .send()
            .await?;
        read_reply("predict", response).await
    }

    pub async fn soil_analysis(&self, request: &SoilRequest) -> Result<SoilReport, ClientError> {
        let response = self
            .http
            .post(self.endpoint("soil-analysis"))
            .json(request)
            .send()
            .await?;
        read_reply("soil-analysis", response).await
    }

    pub async fn carbon_footprint(
        &self,
        request: &FootprintRequest,
    ) -> Result<FootprintReport, ClientError> {
        let response = self
            .http
            .post(self.endpoint("carbon-footprint"))
            .json(request)
            .send()
            .await?;
        read_reply("carbon-footprint", response).await
    }

    pub async fn nearby(&self, query: &NearbyQuery) -> Result<NearbyReport, ClientError> {
        let response = self
            .http
            .get(self.endpoint("nearby"))
            .query(query)
            .send()
            .await?;
        read_reply("nearby", response).await
    }
}

/// Decodes the success body, or the `{error}` body on a non-2xx status.
async fn read_reply<T: DeserializeOwned>(
    endpoint: &str,
    response: Response,
) -> Result<T, ClientError> {
    let status = response.status();
    debug!(endpoint, status = status.as_u16(), "backend replied");

    let bytes = response.bytes().await?;
    if status.is_success() {
        return Ok(serde_json::from_slice(&bytes)?);
    }

    let body: ErrorBody = serde_json::from_slice(&bytes)?;
    Err(ClientError::Server(body.error.unwrap_or_else(|| {
        format!("backend responded with {status}")
    })))
}
