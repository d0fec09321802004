use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::ContentStore;
use super::queries::{Query, format_cutoff};
use crate::config::ContentStoreConfig;
use crate::error::AppError;
use crate::models::{Event, Officer, PrRecord, SiteSettings, Update};

/// Host used when no usable project id is configured. The loader never sends
/// requests in that state, so the client only needs to be constructible.
const PLACEHOLDER_PROJECT: &str = "placeholder";

const PUBLISHED_PERSPECTIVE: &str = "published";

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: Option<T>,
}

/// [`ContentStore`] backed by the Sanity HTTP query API.
pub struct SanityClient {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl SanityClient {
    pub fn new(config: &ContentStoreConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(http, config))
    }

    /// Use a preconfigured [`reqwest::Client`] (proxies, custom TLS, ...).
    pub fn with_client(http: reqwest::Client, config: &ContentStoreConfig) -> Self {
        Self {
            http,
            endpoint: query_endpoint(config),
            token: config.token.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds the request URL for `query`, JSON-encoding the cutoff parameter.
    pub fn query_url(&self, query: Query, cutoff: Option<DateTime<Utc>>) -> Result<Url, AppError> {
        // Published documents only, even when a token would expose drafts.
        let mut params = vec![
            ("query".to_string(), query.groq()),
            ("perspective".to_string(), PUBLISHED_PERSPECTIVE.to_string()),
        ];
        if let Some(cutoff) = cutoff.filter(|_| query.takes_cutoff()) {
            let encoded = serde_json::to_string(&format_cutoff(cutoff)).map_err(|source| {
                AppError::Decode {
                    query: query.name(),
                    source,
                }
            })?;
            params.push(("$cutoff".to_string(), encoded));
        }

        Url::parse_with_params(&self.endpoint, &params).map_err(|e| {
            AppError::Configuration(format!("invalid content store URL {}: {}", self.endpoint, e))
        })
    }

    #[instrument(skip_all, fields(query = %query))]
    async fn fetch<T: DeserializeOwned>(
        &self,
        query: Query,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<Option<T>, AppError> {
        let url = self.query_url(query, cutoff)?;
        debug!("Querying content store");

        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|source| AppError::Http {
            query: query.name(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UnexpectedStatus {
                query: query.name(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| AppError::ResponseBody {
                query: query.name(),
                source,
            })?;

        decode_result(query, &body)
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        query: Query,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<Vec<T>, AppError> {
        Ok(self.fetch(query, cutoff).await?.unwrap_or_default())
    }
}

#[rocket::async_trait]
impl ContentStore for SanityClient {
    async fn site_settings(&self) -> Result<Option<SiteSettings>, AppError> {
        self.fetch(Query::SiteSettings, None).await
    }

    async fn upcoming_events(&self, cutoff: DateTime<Utc>) -> Result<Vec<Event>, AppError> {
        self.fetch_list(Query::UpcomingEvents, Some(cutoff)).await
    }

    async fn archived_events(&self, cutoff: DateTime<Utc>) -> Result<Vec<Event>, AppError> {
        self.fetch_list(Query::ArchivedEvents, Some(cutoff)).await
    }

    async fn updates(&self) -> Result<Vec<Update>, AppError> {
        self.fetch_list(Query::Updates, None).await
    }

    async fn officers(&self) -> Result<Vec<Officer>, AppError> {
        self.fetch_list(Query::Officers, None).await
    }

    async fn pr_records(&self) -> Result<Vec<PrRecord>, AppError> {
        self.fetch_list(Query::PrRecords, None).await
    }
}

fn query_endpoint(config: &ContentStoreConfig) -> String {
    let project = config.valid_project_id().unwrap_or(PLACEHOLDER_PROJECT);
    let host = if config.use_cdn { "apicdn" } else { "api" };
    let version = config.api_version.trim_start_matches('v');

    format!(
        "https://{project}.{host}.sanity.io/v{version}/data/query/{dataset}",
        dataset = config.dataset
    )
}

/// Unwraps the `{ "result": ... }` envelope. A `null` result stays `None`.
pub fn decode_result<T: DeserializeOwned>(query: Query, body: &[u8]) -> Result<Option<T>, AppError> {
    serde_json::from_slice::<QueryResponse<T>>(body)
        .map(|response| response.result)
        .map_err(|source| AppError::Decode {
            query: query.name(),
            source,
        })
}
