//! ScriptedTransport - 開発用・テスト用の Transport
//!
//! # 仕組み
//! - (method, path) ごとに応答の VecDeque を持つ
//! - 応答は登録順に返し、最後の 1 件は使い切らずに繰り返す
//! - 未登録の (method, path) は接続失敗（TransportFailed）として扱う
//! - 受け取ったリクエストはすべて記録する
//!
//! # 使用例
//! ```ignore
//! let transport = ScriptedTransport::new()
//!     .route(HttpMethod::Get, "/", HttpOutcome::ok("OK"))
//!     .route(HttpMethod::Post, "/stop_train", HttpOutcome::ok("{}"))
//!     .route(HttpMethod::Post, "/stop_train", HttpOutcome::response(404, "{}"));
//! ```

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use reqwest::Url;
use tokio::sync::Mutex;

use crate::domain::HttpOutcome;
use crate::ports::{HttpMethod, HttpRequest, Transport};

type RouteKey = (HttpMethod, String);

#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<RouteKey, VecDeque<HttpOutcome>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one more response for `method path`.
    pub fn route(mut self, method: HttpMethod, path: &str, outcome: HttpOutcome) -> Self {
        self.routes
            .get_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(outcome);
        self
    }

    /// Requests received so far, in order.
    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().await.clone()
    }

    /// Requests received for one path.
    pub async fn requests_to(&self, path: &str) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .await
            .iter()
            .filter(|r| path_of(&r.url).as_deref() == Some(path))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn request(&self, request: HttpRequest) -> HttpOutcome {
        let Some(path) = path_of(&request.url) else {
            let reason = format!("invalid url: {}", request.url);
            self.requests.lock().await.push(request);
            return HttpOutcome::transport_failed(reason);
        };
        let key = (request.method, path);
        self.requests.lock().await.push(request);

        let mut routes = self.routes.lock().await;
        let Some(queue) = routes.get_mut(&key) else {
            return HttpOutcome::transport_failed(format!(
                "connection refused: no route for {} {}",
                key.0, key.1
            ));
        };
        // 最後の 1 件は残しておく
        if queue.len() > 1 {
            queue.pop_front().unwrap_or_else(|| HttpOutcome::transport_failed("empty route"))
        } else {
            queue
                .front()
                .cloned()
                .unwrap_or_else(|| HttpOutcome::transport_failed("empty route"))
        }
    }
}

fn path_of(url: &str) -> Option<String> {
    Url::parse(url).ok().map(|u| u.path().to_string())
}
