//! ReqwestTransport - 本番用の Transport
//!
//! `reqwest::Client` は起動時に 1 つだけ作り、プロセス終了時に drop します。
//! コネクションプールはこの Client が持つので、リクエストごとの
//! 初期化 / 後始末は不要です（RequestBuilder や Response は所有権で解放される）。

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use crate::domain::HttpOutcome;
use crate::ports::{HttpMethod, HttpRequest, Transport};

/// Transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build the process-wide HTTP client.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("trainctl/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(&self, request: HttpRequest) -> HttpOutcome {
        let HttpRequest {
            method,
            url,
            body,
            headers,
        } = request;

        let mut builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(%method, %url, error = %e, "transport failure");
                return HttpOutcome::transport_failed(e.to_string());
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => HttpOutcome::Response { status, body },
            Err(e) => {
                // ヘッダは来たが body が読めなかった → 交換は完了していない
                warn!(%method, %url, status, error = %e, "failed to read response body");
                HttpOutcome::transport_failed(e.to_string())
            }
        }
    }
}
