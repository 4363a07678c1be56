use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::throttle::Throttle;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("HTTP {status}: {url}")]
    Status { status: u16, url: String },
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP client that waits on its throttle before every request and treats
/// any non-2xx status as an error. No retries.
pub struct Fetcher {
    client: Client,
    throttle: Throttle,
}

impl Fetcher {
    pub fn new(throttle: Throttle) -> Self {
        Self {
            client: Client::new(),
            throttle,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub async fn get(&self, url: &str) -> Result<Response, RequestError> {
        self.execute(self.client.get(url)).await
    }

    pub async fn execute(&self, builder: RequestBuilder) -> Result<Response, RequestError> {
        let request = builder.build().map_err(|e| RequestError::Transport {
            url: e.url().map(redact).unwrap_or_default(),
            source: e,
        })?;
        let url = redact(request.url());

        self.throttle.wait().await;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|source| RequestError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response)
    }

    pub async fn get_text(&self, url: &str) -> Result<String, RequestError> {
        let response = self.get(url).await?;
        let url = redact(response.url());
        response
            .text()
            .await
            .map_err(|source| RequestError::Decode { url, source })
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, RequestError> {
        let response = self.execute(builder).await?;
        let url = redact(response.url());
        response
            .json::<T>()
            .await
            .map_err(|source| RequestError::Decode { url, source })
    }
}

/// Render a URL for logs and errors with the `api_key` query value masked.
fn redact(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "api_key") {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    let mut masked = url.clone();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
