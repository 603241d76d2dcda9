use super::dto::{GraphQlRequest, GraphQlResponse, PageData};
use super::{mapper, queries};
use crate::error::SourceError;
use crate::retry::{run_with_backoff, RetryPolicy};
use crate::traits::{CatalogSource, PageSort};
use anime_sync_models::MediaRecord;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const HTTP_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("anisync/", env!("CARGO_PKG_VERSION"));

/// GraphQL transport against the AniList catalog. All requests go through
/// one retry/backoff path; pages are fetched strictly sequentially.
pub struct AniListClient {
    http: Client,
    endpoint: String,
    retry: RetryPolicy,
    per_page: u32,
}

impl AniListClient {
    pub fn new(endpoint: impl Into<String>, per_page: u32) -> Result<Self, SourceError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            retry: RetryPolicy::default(),
            per_page,
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Issue one GraphQL query, retrying rate-limit signals per the policy.
    pub async fn request(&self, query: &str, variables: &Value) -> Result<Value, SourceError> {
        run_with_backoff(&self.retry, || self.post_graphql(query, variables)).await
    }

    async fn post_graphql(&self, query: &str, variables: &Value) -> Result<Value, SourceError> {
        let body = GraphQlRequest {
            query: query.to_string(),
            variables: variables.clone(),
        };

        let response = self.http.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SourceError::RateLimited { attempts: 1 });
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SourceError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: GraphQlResponse<Value> = response.json().await?;
        if let Some(errors) = parsed.errors {
            if errors.iter().any(|e| e.is_rate_limit()) {
                return Err(SourceError::RateLimited { attempts: 1 });
            }
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(SourceError::Api(messages.join(", ")));
        }

        parsed
            .data
            .ok_or_else(|| SourceError::Api("response contained no data".to_string()))
    }

    async fn fetch_page(
        &self,
        sort: PageSort,
        page: u32,
    ) -> Result<Vec<MediaRecord>, SourceError> {
        let data = self
            .request(
                &queries::page_query(),
                &queries::page_variables(page, self.per_page, sort.wire_value()),
            )
            .await?;

        let page_data: PageData = serde_json::from_value(data)?;
        Ok(page_data
            .page
            .media
            .into_iter()
            .map(mapper::to_record)
            .collect())
    }
}

#[async_trait]
impl CatalogSource for AniListClient {
    async fn fetch_sorted(
        &self,
        sort: PageSort,
        limit: u32,
    ) -> Result<Vec<MediaRecord>, SourceError> {
        let total_pages = limit.div_ceil(self.per_page);
        let mut records = Vec::with_capacity(limit as usize);

        for page in 1..=total_pages {
            let batch = self.fetch_page(sort, page).await?;
            let batch_len = batch.len();
            records.extend(batch);
            debug!(page, fetched = batch_len, total = records.len(), "fetched page");

            // Short page means the catalog ran out before the limit.
            if batch_len < self.per_page as usize || records.len() >= limit as usize {
                break;
            }
        }

        records.truncate(limit as usize);
        Ok(records)
    }

    async fn fetch_by_ids(&self, ids: &[i64]) -> Result<Vec<MediaRecord>, SourceError> {
        let mut records = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(self.per_page as usize) {
            let data = self
                .request(
                    &queries::by_ids_query(),
                    &queries::by_ids_variables(chunk, self.per_page),
                )
                .await?;

            let page_data: PageData = serde_json::from_value(data)?;
            records.extend(page_data.page.media.into_iter().map(mapper::to_record));
        }

        Ok(records)
    }

    async fn search_id(&self, title: &str) -> Result<Option<i64>, SourceError> {
        let data = self
            .request(&queries::search_query(), &queries::search_variables(title))
            .await?;

        let page_data: PageData = serde_json::from_value(data)?;
        Ok(page_data.page.media.first().map(|node| node.id))
    }
}
