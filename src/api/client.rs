// client.rs
use crate::api::{ApiError, ListingsPage};
use crate::domain::filters::FilterQuery;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("listing_browser/", env!("CARGO_PKG_VERSION"));

/// A single `GET /api/listings` request: serialized filters plus the page to fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingsQuery {
    pub filters: FilterQuery,
    pub page: u32,
    pub page_size: u32,
}

impl ListingsQuery {
    /// Query pairs in wire order: filters first, then `page` and `page_size`.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .filters
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("page_size".to_string(), self.page_size.to_string()));
        pairs
    }

    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }
}

/// The external collaborator that serves listing pages.
pub trait ListingsApi: Send + Sync {
    fn fetch_listings(&self, query: &ListingsQuery) -> Result<ListingsPage, ApiError>;
}

pub struct HttpListingsApi {
    client: Client,
    endpoint: Url,
}

impl HttpListingsApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let endpoint = Url::parse(&format!("{}/api/listings", base_url.trim_end_matches('/')))
            .map_err(|e| ApiError::Endpoint(e.to_string()))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ListingsApi for HttpListingsApi {
    fn fetch_listings(&self, query: &ListingsQuery) -> Result<ListingsPage, ApiError> {
        let resp = self
            .client
            .get(self.endpoint.clone())
            .query(&query.pairs())
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text()?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
