//! EventSink port - イベント記録の抽象化
//!
//! # 実装
//! - TracingEventSink: tracing のログとして出力（本番用、`impls::tracing_sink`）
//! - MemoryEventSink: メモリに溜める（テスト用）

use std::sync::Mutex;

use crate::domain::HarnessEvent;

/// EventSink は harness のイベントを記録
///
/// 同期 trait: 記録は待たない（失敗しても scenario には影響させない）。
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &HarnessEvent);
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<HarnessEvent>>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<HarnessEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl EventSink for MemoryEventSink {
    fn emit(&self, event: &HarnessEvent) {
        let mut events = self
            .events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceStatus;

    #[test]
    fn memory_sink_keeps_order() {
        let sink = MemoryEventSink::new();
        sink.emit(&HarnessEvent::ServiceChecked {
            status: ServiceStatus::Up,
        });
        sink.emit(&HarnessEvent::RunningTasks {
            snapshot: "[]".to_string(),
        });

        let names: Vec<_> = sink.events().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["service_checked", "running_tasks"]);
    }
}
