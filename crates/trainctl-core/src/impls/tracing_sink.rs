//! TracingEventSink - HarnessEvent を tracing のレコードとして出力

use tracing::{info, warn};

use crate::domain::HarnessEvent;
use crate::ports::EventSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &HarnessEvent) {
        let name = event.name();
        match event {
            HarnessEvent::StateEntered { scenario, state } => {
                info!(event = name, %scenario, %state, "scenario state");
            }
            HarnessEvent::ServiceChecked { status } if status.is_up() => {
                info!(event = name, ?status, "training service is up");
            }
            HarnessEvent::ServiceChecked { status } => {
                warn!(event = name, ?status, "training service is not reachable; start it first");
            }
            HarnessEvent::JobStarted { handle } => {
                info!(event = name, task_id = %handle, "training job started");
            }
            HarnessEvent::StartFailed { error } => {
                warn!(event = name, kind = ?error.kind(), %error, "failed to start training job");
            }
            HarnessEvent::RunningTasks { snapshot } => {
                info!(event = name, %snapshot, "running tasks");
            }
            HarnessEvent::RunningTasksFailed { error } => {
                warn!(event = name, kind = ?error.kind(), %error, "failed to list running tasks");
            }
            HarnessEvent::StopConfirmed { handle } => {
                info!(event = name, task_id = %handle, "stopping training job");
            }
            HarnessEvent::StopDeclined { handle, hint } => {
                info!(event = name, task_id = %handle, %hint, "training job left running");
            }
            HarnessEvent::JobStopped { handle, response } => {
                info!(event = name, task_id = %handle, %response, "training job stopped");
            }
            HarnessEvent::StopFailed { handle, error } => {
                warn!(event = name, task_id = %handle, kind = ?error.kind(), %error, "failed to stop training job");
            }
            HarnessEvent::NotFoundChecked { passed: true, detail } => {
                info!(event = name, %detail, "unknown task was rejected with 404");
            }
            HarnessEvent::NotFoundChecked { passed: false, detail } => {
                warn!(event = name, %detail, "unknown task was not rejected with 404");
            }
        }
    }
}
