//! Job control client.
//!
//! Typed operations over the training service. Each call issues exactly one
//! request, interprets the outcome and forgets it; nothing is cached between
//! calls except the base URL and the transport.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    HttpOutcome, JobHandle, JobRequestSpec, QueryError, RequestFailure, ServiceStatus, StartError,
    StopError,
};
use crate::extract::extract_task_id;
use crate::ports::{HttpRequest, Transport};

pub const STATUS_PATH: &str = "/";
pub const TRAIN_PATH: &str = "/train";
pub const RUNNING_TASKS_PATH: &str = "/running_tasks";
pub const STOP_TRAIN_PATH: &str = "/stop_train";

/// Client for one training service.
#[derive(Clone)]
pub struct JobControlClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl JobControlClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a service path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /`: Up iff the service answers 200.
    pub async fn check_status(&self) -> ServiceStatus {
        match self.send(HttpRequest::get(self.url(STATUS_PATH))).await {
            HttpOutcome::Response { status: 200, .. } => ServiceStatus::Up,
            _ => ServiceStatus::Down,
        }
    }

    /// `POST /train`, expecting a `task_id` in the response.
    pub async fn start(&self, spec: &JobRequestSpec) -> Result<JobHandle, StartError> {
        let body = self.post_train(spec).await?;
        // 空の task_id は JobHandle にできない → MalformedResponse
        extract_task_id(&body)
            .and_then(|id| JobHandle::new(id).ok())
            .ok_or(StartError::MalformedResponse { body })
    }

    /// `POST /train` without requiring an identifier back.
    ///
    /// Fire-and-forget submission for services whose `/train` only
    /// acknowledges the request.
    pub async fn submit(&self, spec: &JobRequestSpec) -> Result<String, RequestFailure> {
        self.post_train(spec).await
    }

    /// `GET /running_tasks`, returned verbatim.
    pub async fn list_running(&self) -> Result<String, QueryError> {
        let outcome = self.send(HttpRequest::get(self.url(RUNNING_TASKS_PATH))).await;
        Ok(expect_ok(outcome)?)
    }

    /// `POST /stop_train` for `handle`; 404 maps to `StopError::NotFound`.
    pub async fn stop(&self, handle: &JobHandle) -> Result<String, StopError> {
        let body = serde_json::json!({ "task_id": handle.task_id() }).to_string();
        let outcome = self
            .send(HttpRequest::post_json(self.url(STOP_TRAIN_PATH), body))
            .await;
        match outcome {
            HttpOutcome::Response { status: 404, body } => Err(StopError::NotFound {
                task_id: handle.task_id().to_string(),
                body,
            }),
            other => Ok(expect_ok(other)?),
        }
    }

    async fn post_train(&self, spec: &JobRequestSpec) -> Result<String, RequestFailure> {
        let request = HttpRequest::post_json(self.url(TRAIN_PATH), spec.to_json_body());
        expect_ok(self.send(request).await)
    }

    async fn send(&self, request: HttpRequest) -> HttpOutcome {
        let method = request.method;
        let url = request.url.clone();
        let outcome = self.transport.request(request).await;
        debug!(%method, %url, status = ?outcome.status(), "request finished");
        outcome
    }
}

/// 200 → body, それ以外 → RequestFailure
fn expect_ok(outcome: HttpOutcome) -> Result<String, RequestFailure> {
    match outcome {
        HttpOutcome::Response { status: 200, body } => Ok(body),
        HttpOutcome::Response { status, body } => Err(RequestFailure::Http { status, body }),
        HttpOutcome::TransportFailed { reason } => Err(RequestFailure::Transport { reason }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use crate::impls::ScriptedTransport;
    use crate::ports::HttpMethod;

    const BASE: &str = "http://localhost:8000";

    fn client(transport: &Arc<ScriptedTransport>) -> JobControlClient {
        JobControlClient::new(BASE, transport.clone())
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let transport = Arc::new(ScriptedTransport::new());
        let c = JobControlClient::new("http://localhost:8000/", transport);
        assert_eq!(c.url(TRAIN_PATH), "http://localhost:8000/train");
        assert_eq!(c.url(STATUS_PATH), "http://localhost:8000/");
    }

    #[tokio::test]
    async fn status_is_up_on_200() {
        let transport = Arc::new(ScriptedTransport::new().route(
            HttpMethod::Get,
            STATUS_PATH,
            HttpOutcome::ok("OK"),
        ));
        assert_eq!(client(&transport).check_status().await, ServiceStatus::Up);
    }

    #[tokio::test]
    async fn status_is_down_on_other_codes_and_transport_failure() {
        let transport = Arc::new(ScriptedTransport::new().route(
            HttpMethod::Get,
            STATUS_PATH,
            HttpOutcome::response(503, "maintenance"),
        ));
        assert_eq!(client(&transport).check_status().await, ServiceStatus::Down);

        // ルート未登録 = 接続失敗
        let transport = Arc::new(ScriptedTransport::new());
        assert_eq!(client(&transport).check_status().await, ServiceStatus::Down);
    }

    #[tokio::test]
    async fn start_returns_handle_and_posts_json() {
        let transport = Arc::new(ScriptedTransport::new().route(
            HttpMethod::Post,
            TRAIN_PATH,
            HttpOutcome::ok(r#"{"task_id":"train_0.001_10_123"}"#),
        ));
        let handle = client(&transport)
            .start(&JobRequestSpec::default())
            .await
            .unwrap();
        assert_eq!(handle.task_id(), "train_0.001_10_123");

        let sent = transport.requests().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].url, "http://localhost:8000/train");
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
        let body: serde_json::Value =
            serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"learning_rate": 0.001, "epochs": 10}));
    }

    #[tokio::test]
    async fn start_without_task_id_is_malformed() {
        for body in [r#"{"message":"Training started."}"#, r#"{"task_id":""}"#] {
            let transport = Arc::new(ScriptedTransport::new().route(
                HttpMethod::Post,
                TRAIN_PATH,
                HttpOutcome::ok(body),
            ));
            let err = client(&transport)
                .start(&JobRequestSpec::default())
                .await
                .unwrap_err();
            assert_eq!(
                err,
                StartError::MalformedResponse {
                    body: body.to_string()
                }
            );
        }
    }

    #[tokio::test]
    async fn start_reports_status_and_body_on_http_error() {
        let transport = Arc::new(ScriptedTransport::new().route(
            HttpMethod::Post,
            TRAIN_PATH,
            HttpOutcome::response(422, r#"{"detail":"bad"}"#),
        ));
        let err = client(&transport)
            .start(&JobRequestSpec::default())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StartError::Request(RequestFailure::Http {
                status: 422,
                body: r#"{"detail":"bad"}"#.to_string()
            })
        );
    }

    #[tokio::test]
    async fn start_reports_transport_failure() {
        let transport = Arc::new(ScriptedTransport::new());
        let err = client(&transport)
            .start(&JobRequestSpec::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TransportFailure);
    }

    #[tokio::test]
    async fn submit_accepts_bodies_without_task_id() {
        let transport = Arc::new(ScriptedTransport::new().route(
            HttpMethod::Post,
            TRAIN_PATH,
            HttpOutcome::ok(r#"{"message":"Training started."}"#),
        ));
        let spec = JobRequestSpec::new(0.01, 3).with_experiment_name("zyz");
        let body = client(&transport).submit(&spec).await.unwrap();
        assert_eq!(body, r#"{"message":"Training started."}"#);

        let sent = transport.requests().await;
        assert!(sent[0].body.as_deref().unwrap().contains("\"experiment_name\":\"zyz\""));
    }

    #[tokio::test]
    async fn list_running_returns_raw_body() {
        let transport = Arc::new(ScriptedTransport::new().route(
            HttpMethod::Get,
            RUNNING_TASKS_PATH,
            HttpOutcome::ok(r#"{"running_tasks":["a"],"count":1}"#),
        ));
        let body = client(&transport).list_running().await.unwrap();
        assert_eq!(body, r#"{"running_tasks":["a"],"count":1}"#);
    }

    #[tokio::test]
    async fn list_running_fails_on_non_200() {
        let transport = Arc::new(ScriptedTransport::new().route(
            HttpMethod::Get,
            RUNNING_TASKS_PATH,
            HttpOutcome::response(500, "oops"),
        ));
        let err = client(&transport).list_running().await.unwrap_err();
        assert_eq!(err.0.status(), Some(500));
    }

    #[tokio::test]
    async fn stop_sends_task_id_and_returns_body() {
        let transport = Arc::new(ScriptedTransport::new().route(
            HttpMethod::Post,
            STOP_TRAIN_PATH,
            HttpOutcome::ok(r#"{"status":"stopped"}"#),
        ));
        let handle = JobHandle::new("train_0.001_10_123").unwrap();
        let body = client(&transport).stop(&handle).await.unwrap();
        assert_eq!(body, r#"{"status":"stopped"}"#);

        let sent = transport.requests().await;
        assert_eq!(
            sent[0].body.as_deref(),
            Some(r#"{"task_id":"train_0.001_10_123"}"#)
        );
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn stop_maps_404_to_not_found() {
        let transport = Arc::new(ScriptedTransport::new().route(
            HttpMethod::Post,
            STOP_TRAIN_PATH,
            HttpOutcome::response(404, r#"{"error":"task not found"}"#),
        ));
        let handle = JobHandle::new("train_0.001_5_9999999999999").unwrap();
        let err = client(&transport).stop(&handle).await.unwrap_err();
        assert_eq!(
            err,
            StopError::NotFound {
                task_id: "train_0.001_5_9999999999999".to_string(),
                body: r#"{"error":"task not found"}"#.to_string()
            }
        );
    }

    #[tokio::test]
    async fn stop_maps_other_failures_to_other() {
        let transport = Arc::new(ScriptedTransport::new().route(
            HttpMethod::Post,
            STOP_TRAIN_PATH,
            HttpOutcome::response(500, "boom"),
        ));
        let handle = JobHandle::new("t").unwrap();
        let err = client(&transport).stop(&handle).await.unwrap_err();
        assert!(matches!(err, StopError::Other(RequestFailure::Http { status: 500, .. })));

        let transport = Arc::new(ScriptedTransport::new());
        let err = client(&transport).stop(&handle).await.unwrap_err();
        assert!(matches!(err, StopError::Other(RequestFailure::Transport { .. })));
    }
}
