//! HTTP client with bounded retry for unreliable upstreams
//!
//! All outbound calls go through this client. Each attempt gets its own
//! timeout from the [`RetryPolicy`]; failed attempts wait a flat backoff and
//! try again until the attempt budget is spent, at which point the last
//! failure surfaces as [`AppError::Upstream`].

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::sleep;

use super::retry_policy::RetryPolicy;
use crate::shared::errors::app_error::describe_request_error;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    client: Client,
}

impl FetchClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// GET a JSON document. Retries per `policy`, then parses the body of
    /// the first successful response.
    pub async fn get_json<T, Q>(&self, url: &str, query: &Q, policy: &RetryPolicy) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.get_with_retries(url, query, policy).await?;
        let body = response.text().await.map_err(|e| {
            AppError::Serialization(format!("Failed to read response from {}: {}", url, e))
        })?;

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            AppError::Serialization(format!(
                "Failed to parse response from {}: {}. Body: {}",
                url, e, preview
            ))
        })
    }

    /// GET a raw response, status-checked but not consumed. Used by the
    /// media proxy to stream binary bodies through without buffering.
    pub async fn get_raw(&self, url: &str, policy: &RetryPolicy) -> AppResult<Response> {
        let no_query: [(&str, &str); 0] = [];
        self.get_with_retries(url, &no_query, policy).await
    }

    async fn get_with_retries<Q>(
        &self,
        url: &str,
        query: &Q,
        policy: &RetryPolicy,
    ) -> AppResult<Response>
    where
        Q: Serialize + ?Sized,
    {
        let mut last_message = String::new();

        for attempt in 1..=policy.max_attempts {
            let result = self
                .client
                .get(url)
                .query(query)
                .timeout(policy.timeout)
                .send()
                .await;

            match result {
                Ok(response) if response.status().is_success() => {
                    log::debug!("GET {} succeeded on attempt {}", url, attempt);
                    return Ok(response);
                }
                Ok(response) => {
                    last_message = format!("HTTP {}", response.status());
                }
                Err(e) => {
                    last_message = describe_request_error(&e);
                }
            }

            if attempt < policy.max_attempts {
                log::warn!(
                    "GET {} failed (attempt {}/{}): {}. Retrying in {:?}",
                    url,
                    attempt,
                    policy.max_attempts,
                    last_message,
                    policy.backoff
                );
                sleep(policy.backoff).await;
            }
        }

        log::warn!(
            "GET {} failed after {} attempts: {}",
            url,
            policy.max_attempts,
            last_message
        );
        Err(AppError::Upstream {
            url: url.to_string(),
            message: last_message,
        })
    }
}
