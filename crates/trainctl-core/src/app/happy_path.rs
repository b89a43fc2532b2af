//! Happy path scenario: start a job, look at it, optionally stop it.

use tracing::debug;

use super::harness::Harness;
use crate::domain::{
    HarnessEvent, JobHandle, ScenarioName, ScenarioState, StartError, StopError,
};

const SCENARIO: ScenarioName = ScenarioName::HappyPath;

/// How the started job was left.
#[derive(Debug, Clone, PartialEq)]
pub enum StopResolution {
    /// Stop confirmed and accepted by the service.
    Stopped { response: String },
    /// Stop declined; the job keeps running.
    LeftRunning,
    /// Stop confirmed but the service refused or could not be reached.
    StopFailed(StopError),
}

/// Terminal result of the happy path.
#[derive(Debug, Clone, PartialEq)]
pub enum HappyPathOutcome {
    AbortedServiceDown,
    AbortedStartFailed(StartError),
    Done {
        handle: JobHandle,
        resolution: StopResolution,
    },
}

impl HappyPathOutcome {
    pub fn final_state(&self) -> ScenarioState {
        match self {
            Self::AbortedServiceDown => ScenarioState::AbortedServiceDown,
            Self::AbortedStartFailed(_) => ScenarioState::AbortedStartFailed,
            Self::Done { .. } => ScenarioState::Done,
        }
    }

    pub fn handle(&self) -> Option<&JobHandle> {
        match self {
            Self::Done { handle, .. } => Some(handle),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Self::Done {
                resolution: StopResolution::Stopped { .. } | StopResolution::LeftRunning,
                ..
            }
        )
    }
}

impl Harness {
    /// Run the happy path scenario to a terminal state.
    pub async fn run_happy_path(&self) -> HappyPathOutcome {
        self.enter(SCENARIO, ScenarioState::CheckingStatus);
        let status = self.client.check_status().await;
        self.emit(HarnessEvent::ServiceChecked { status });
        if !status.is_up() {
            self.enter(SCENARIO, ScenarioState::AbortedServiceDown);
            return HappyPathOutcome::AbortedServiceDown;
        }

        self.enter(SCENARIO, ScenarioState::Starting);
        debug!(request = %self.config.train_request.to_json_body(), "starting training job");
        let handle = match self.client.start(&self.config.train_request).await {
            Ok(handle) => handle,
            Err(error) => {
                self.emit(HarnessEvent::StartFailed {
                    error: error.clone(),
                });
                self.enter(SCENARIO, ScenarioState::AbortedStartFailed);
                return HappyPathOutcome::AbortedStartFailed(error);
            }
        };
        self.emit(HarnessEvent::JobStarted {
            handle: handle.clone(),
        });

        self.settle(self.config.start_settle).await;
        self.list_running().await;

        self.enter(SCENARIO, ScenarioState::AwaitingConfirmation);
        let prompt = format!("\nStop training job {handle}? (y/n): ");
        if !self.confirmation.confirm(&prompt).await {
            self.emit(HarnessEvent::StopDeclined {
                hint: self.stop_hint(&handle),
                handle: handle.clone(),
            });
            self.enter(SCENARIO, ScenarioState::Done);
            return HappyPathOutcome::Done {
                handle,
                resolution: StopResolution::LeftRunning,
            };
        }

        self.emit(HarnessEvent::StopConfirmed {
            handle: handle.clone(),
        });
        self.enter(SCENARIO, ScenarioState::Stopping);
        let resolution = match self.client.stop(&handle).await {
            Ok(response) => {
                self.emit(HarnessEvent::JobStopped {
                    handle: handle.clone(),
                    response: response.clone(),
                });
                self.settle(self.config.stop_settle).await;
                self.list_running().await;
                StopResolution::Stopped { response }
            }
            Err(error) => {
                self.emit(HarnessEvent::StopFailed {
                    handle: handle.clone(),
                    error: error.clone(),
                });
                StopResolution::StopFailed(error)
            }
        };

        self.enter(SCENARIO, ScenarioState::Done);
        HappyPathOutcome::Done { handle, resolution }
    }

    async fn settle(&self, duration: std::time::Duration) {
        self.enter(SCENARIO, ScenarioState::Waiting(duration));
        self.waiter.wait(duration).await;
    }

    /// A failed listing is reported but never ends the scenario.
    async fn list_running(&self) {
        self.enter(SCENARIO, ScenarioState::ListingRunning);
        match self.client.list_running().await {
            Ok(snapshot) => self.emit(HarnessEvent::RunningTasks { snapshot }),
            Err(error) => self.emit(HarnessEvent::RunningTasksFailed { error }),
        }
    }

    /// Command line that stops `handle` by hand.
    fn stop_hint(&self, handle: &JobHandle) -> String {
        let body = serde_json::json!({ "task_id": handle.task_id() });
        format!(
            "curl -X POST {} -H 'Content-Type: application/json' -d '{}'",
            self.client.url(crate::client::STOP_TRAIN_PATH),
            body
        )
    }
}
