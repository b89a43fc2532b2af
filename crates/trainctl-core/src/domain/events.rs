//! Events - scenario の進行中に発生するイベント
//!
//! Orchestrator は状態遷移と観測結果をすべて EventSink に流します。
//! 表示（コンソール / ログ）は EventSink の実装の責務で、
//! scenario の成否はイベントの扱われ方に左右されません。

use super::errors::{QueryError, StartError, StopError};
use super::ids::JobHandle;
use super::outcome::ServiceStatus;
use super::state::{ScenarioName, ScenarioState};

/// HarnessEvent は harness で発生したイベント
#[derive(Debug, Clone, PartialEq)]
pub enum HarnessEvent {
    /// A scenario moved to a new state.
    StateEntered {
        scenario: ScenarioName,
        state: ScenarioState,
    },
    ServiceChecked {
        status: ServiceStatus,
    },
    JobStarted {
        handle: JobHandle,
    },
    StartFailed {
        error: StartError,
    },
    RunningTasks {
        snapshot: String,
    },
    RunningTasksFailed {
        error: QueryError,
    },
    StopConfirmed {
        handle: JobHandle,
    },
    /// The job keeps running; `hint` is a command that stops it later.
    StopDeclined {
        handle: JobHandle,
        hint: String,
    },
    JobStopped {
        handle: JobHandle,
        response: String,
    },
    StopFailed {
        handle: JobHandle,
        error: StopError,
    },
    /// Result of the not-found check.
    NotFoundChecked {
        passed: bool,
        detail: String,
    },
}

impl HarnessEvent {
    /// Short machine-friendly name, used as the `event` field in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StateEntered { .. } => "state_entered",
            Self::ServiceChecked { .. } => "service_checked",
            Self::JobStarted { .. } => "job_started",
            Self::StartFailed { .. } => "start_failed",
            Self::RunningTasks { .. } => "running_tasks",
            Self::RunningTasksFailed { .. } => "running_tasks_failed",
            Self::StopConfirmed { .. } => "stop_confirmed",
            Self::StopDeclined { .. } => "stop_declined",
            Self::JobStopped { .. } => "job_stopped",
            Self::StopFailed { .. } => "stop_failed",
            Self::NotFoundChecked { .. } => "not_found_checked",
        }
    }

    /// Whether this event reports something that went wrong.
    pub fn is_failure(&self) -> bool {
        match self {
            Self::ServiceChecked { status } => !status.is_up(),
            Self::StartFailed { .. } | Self::RunningTasksFailed { .. } | Self::StopFailed { .. } => {
                true
            }
            Self::NotFoundChecked { passed, .. } => !passed,
            _ => false,
        }
    }
}
