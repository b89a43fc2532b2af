//! App - アプリケーション層
//!
//! このモジュールは、ports と client を組み合わせて scenario を実装します。
//!
//! # 主要コンポーネント
//! - **HarnessBuilder**: harness の構築とワイヤリング
//! - **Harness**: 2 つの scenario の実行
//! - **happy_path**: start → list → (stop) の scenario
//! - **not_found**: 存在しない job の stop が 404 になるかの確認

pub mod builder;
pub mod happy_path;
pub mod harness;
pub mod not_found;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, HarnessBuilder};
pub use self::happy_path::{HappyPathOutcome, StopResolution};
pub use self::harness::{Harness, HarnessReport};
pub use self::not_found::NotFoundCheck;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::{RUNNING_TASKS_PATH, STATUS_PATH, STOP_TRAIN_PATH, TRAIN_PATH};
    use crate::domain::HttpOutcome;
    use crate::impls::{RecordingWaiter, ScriptedTransport};
    use crate::ports::{FixedAnswer, HttpMethod, MemoryEventSink};

    #[tokio::test]
    async fn not_found_check_runs_even_when_service_is_down_for_the_happy_path() {
        // `/` は 503 だが `/stop_train` は応答する
        let transport = Arc::new(
            ScriptedTransport::new()
                .route(HttpMethod::Get, STATUS_PATH, HttpOutcome::response(503, ""))
                .route(
                    HttpMethod::Post,
                    STOP_TRAIN_PATH,
                    HttpOutcome::response(404, r#"{"error":"task not found"}"#),
                ),
        );
        let harness = HarnessBuilder::new()
            .transport(transport.clone())
            .waiter(Arc::new(RecordingWaiter::new()))
            .confirmation(Arc::new(FixedAnswer(true)))
            .event_sink(Arc::new(MemoryEventSink::new()))
            .build()
            .unwrap();

        let report = harness.run().await;

        assert_eq!(report.happy_path, HappyPathOutcome::AbortedServiceDown);
        assert!(report.not_found_check.is_passed());
        assert!(!report.is_success());
        assert_eq!(transport.requests_to(STOP_TRAIN_PATH).await.len(), 1);
    }

    #[tokio::test]
    async fn full_run_succeeds_against_a_healthy_service() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .route(HttpMethod::Get, STATUS_PATH, HttpOutcome::ok("OK"))
                .route(
                    HttpMethod::Post,
                    TRAIN_PATH,
                    HttpOutcome::ok(r#"{"task_id":"train_0.001_10_123"}"#),
                )
                .route(HttpMethod::Get, RUNNING_TASKS_PATH, HttpOutcome::ok("[]"))
                // 1 回目: happy path の stop, 2 回目以降: 未知の task
                .route(
                    HttpMethod::Post,
                    STOP_TRAIN_PATH,
                    HttpOutcome::ok(r#"{"status":"stopped"}"#),
                )
                .route(
                    HttpMethod::Post,
                    STOP_TRAIN_PATH,
                    HttpOutcome::response(404, r#"{"error":"task not found"}"#),
                ),
        );
        let harness = HarnessBuilder::new()
            .transport(transport)
            .waiter(Arc::new(RecordingWaiter::new()))
            .confirmation(Arc::new(FixedAnswer(true)))
            .event_sink(Arc::new(MemoryEventSink::new()))
            .build()
            .unwrap();

        let report = harness.run().await;

        assert!(report.is_success());
        assert_eq!(
            report.happy_path.handle().map(|h| h.task_id()),
            Some("train_0.001_10_123")
        );
    }
}
