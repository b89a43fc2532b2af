//! RecordingWaiter - 即座に返り、要求された待ち時間だけを記録

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::ports::Waiter;

#[derive(Debug, Default)]
pub struct RecordingWaiter {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingWaiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn waits(&self) -> Vec<Duration> {
        self.waits.lock().await.clone()
    }
}

#[async_trait]
impl Waiter for RecordingWaiter {
    async fn wait(&self, duration: Duration) {
        self.waits.lock().await.push(duration);
    }
}
