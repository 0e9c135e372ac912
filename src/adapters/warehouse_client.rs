use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::core::interfaces::adapters::{
    AccessTokenProvider, IndexSearchProvider, RetrievalUrlProvider,
};
use crate::core::models::{SearchRequest, SearchResultItem, ServiceSettings, WarehouseError};
use crate::global_constants;
use crate::infrastructure::LogHandle;

const SEARCH_INDEX_ENDPOINT_METHOD: &str = "searchIndexEndpoint";
const GENERATE_RETRIEVAL_URL_METHOD: &str = "generateRetrievalUrl";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchIndexEndpointBody<'a> {
    text_query: &'a str,
    page_size: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchIndexEndpointResponse {
    #[serde(default)]
    search_result_items: Vec<WireSearchResultItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSearchResultItem {
    asset: String,
    #[serde(default)]
    segment: Option<WireSegment>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSegment {
    #[serde(default)]
    start_time: Option<String>,
    #[serde(default)]
    end_time: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerateRetrievalUrlBody {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRetrievalUrlResponse {
    signed_uri: String,
}

impl From<WireSearchResultItem> for SearchResultItem {
    fn from(wire: WireSearchResultItem) -> Self {
        let segment = wire.segment.unwrap_or_default();
        SearchResultItem {
            asset_name: wire.asset,
            start_time: segment.start_time.unwrap_or_default(),
            end_time: segment.end_time,
        }
    }
}

/// REST client for the Vision AI Warehouse API.
pub struct WarehouseClient {
    http_client: reqwest::Client,
    base_url: String,
    token_provider: Arc<dyn AccessTokenProvider>,
    log: LogHandle,
}

impl WarehouseClient {
    pub fn build(
        settings: &ServiceSettings,
        token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_seconds))
            .build()?;

        let client = Self::with_http_client(
            http_client,
            settings.warehouse_base_url(),
            token_provider,
        );
        client
            .log
            .info(format!("Warehouse client initialized for {}", client.base_url));

        Ok(client)
    }

    pub fn with_http_client(
        http_client: reqwest::Client,
        base_url: String,
        token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token_provider,
            log: LogHandle::new(global_constants::LOG_TAG_WAREHOUSE),
        }
    }

    fn construct_method_url(&self, resource_name: &str, method: &str) -> String {
        format!(
            "{}/{}:{}",
            self.base_url,
            encode_resource_name(resource_name),
            method
        )
    }

    async fn post_json<B, R>(
        &self,
        resource_name: &str,
        method: &str,
        body: &B,
    ) -> Result<R, WarehouseError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.construct_method_url(resource_name, method);
        let token = self.token_provider.access_token().await?;

        self.log.debug(format!("POST {}", url));

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| WarehouseError::from_request(method, e))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| WarehouseError::from_request(method, e))?;

        decode_response(method, status, response_text)
    }
}

/// Maps a raw HTTP reply onto the typed result of a warehouse method.
fn decode_response<R: DeserializeOwned>(
    method: &str,
    status: reqwest::StatusCode,
    response_text: String,
) -> Result<R, WarehouseError> {
    if !status.is_success() {
        return Err(WarehouseError::Status {
            endpoint: method.to_string(),
            status: status.as_u16(),
            body: response_text,
        });
    }

    serde_json::from_str(&response_text).map_err(|source| WarehouseError::Decode {
        endpoint: method.to_string(),
        source,
    })
}

#[async_trait]
impl IndexSearchProvider for WarehouseClient {
    async fn search_index_endpoint(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<SearchResultItem>, WarehouseError> {
        let body = SearchIndexEndpointBody {
            text_query: &request.text_query,
            page_size: request.page_size,
        };

        let response: SearchIndexEndpointResponse = self
            .post_json(&request.index_endpoint, SEARCH_INDEX_ENDPOINT_METHOD, &body)
            .await?;

        Ok(response
            .search_result_items
            .into_iter()
            .map(SearchResultItem::from)
            .collect())
    }
}

#[async_trait]
impl RetrievalUrlProvider for WarehouseClient {
    async fn generate_retrieval_url(&self, asset_name: &str) -> Result<String, WarehouseError> {
        let response: GenerateRetrievalUrlResponse = self
            .post_json(
                asset_name,
                GENERATE_RETRIEVAL_URL_METHOD,
                &GenerateRetrievalUrlBody {},
            )
            .await?;

        Ok(response.signed_uri)
    }
}

/// Percent-encodes each segment of a resource name, keeping the `/` separators.
fn encode_resource_name(resource_name: &str) -> String {
    resource_name
        .trim_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
