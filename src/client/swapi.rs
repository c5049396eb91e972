//! HTTP resource client for SWAPI

use super::ResourceClient;
use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{Page, PageToken, PAGE_PARAM};
use crate::types::{JsonValue, ResourceId, ResourceKind};
use async_trait::async_trait;
use tracing::debug;

/// Resource client backed by the SWAPI REST endpoints
///
/// - list: `GET {base}/{endpoint}/?page={token}`
/// - item: `GET {base}/{endpoint}/{id}/`
#[derive(Debug, Clone)]
pub struct SwapiClient {
    http: HttpClient,
}

impl SwapiClient {
    /// Wrap an HTTP client whose base URL points at the API root
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Build a client from validated configuration
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_config(config.http_config())?;
        Ok(Self::new(http))
    }
}

#[async_trait]
impl ResourceClient for SwapiClient {
    async fn fetch_page(&self, kind: ResourceKind, token: &PageToken) -> Result<Page> {
        let path = format!("{}/", kind.endpoint());
        debug!(kind = %kind, page = %token, "Requesting page");
        self.http
            .get_json_with_config(&path, RequestConfig::new().query(PAGE_PARAM, token.as_str()))
            .await
    }

    async fn fetch_one(&self, kind: ResourceKind, id: ResourceId) -> Result<JsonValue> {
        let path = format!("{}/{id}/", kind.endpoint());
        debug!(kind = %kind, id, "Requesting item");
        match self.http.get_json(&path).await {
            Err(Error::HttpStatus { status: 404, .. }) => Err(Error::not_found(kind, id)),
            other => other,
        }
    }
}
