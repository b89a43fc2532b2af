//! Waiter port - 固定待ち時間の抽象化
//!
//! scenario はサービスの状態遷移を待つために 5 秒 / 2 秒待ちます。
//! 正しさのための同期ではなく、単なる猶予です。
//!
//! # テスト容易性
//! - trait により待ち方を差し替え可能
//! - テストでは `RecordingWaiter`（即座に返り、待ち時間だけ記録）を使用

use std::time::Duration;

use async_trait::async_trait;

/// Waiter は制御タスク上で指定時間だけ待つ
#[async_trait]
pub trait Waiter: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Production waiter backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioWaiter;

#[async_trait]
impl Waiter for TokioWaiter {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
