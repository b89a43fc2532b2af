//! Not-found check: stopping a job the service never started must be a 404.

use super::harness::Harness;
use crate::domain::{HarnessEvent, ScenarioName, ScenarioState, StopError};

const SCENARIO: ScenarioName = ScenarioName::StopUnknownJob;

/// Result of the not-found check.
#[derive(Debug, Clone, PartialEq)]
pub enum NotFoundCheck {
    /// The service answered 404.
    Confirmed { body: String },
    /// The service claims to have stopped a job that does not exist.
    UnexpectedSuccess { body: String },
    /// Any failure other than 404 (other status, transport failure).
    UnexpectedError(StopError),
}

impl NotFoundCheck {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }
}

impl Harness {
    /// Stop the synthetic unknown job and expect `StopError::NotFound`.
    pub async fn run_not_found_check(&self) -> NotFoundCheck {
        self.enter(SCENARIO, ScenarioState::Stopping);
        let check = match self.client.stop(&self.unknown_handle).await {
            Err(StopError::NotFound { body, .. }) => NotFoundCheck::Confirmed { body },
            Ok(body) => NotFoundCheck::UnexpectedSuccess { body },
            Err(error) => NotFoundCheck::UnexpectedError(error),
        };

        let detail = match &check {
            NotFoundCheck::Confirmed { body } => body.clone(),
            NotFoundCheck::UnexpectedSuccess { body } => format!("HTTP 200: {body}"),
            NotFoundCheck::UnexpectedError(error) => error.to_string(),
        };
        self.emit(HarnessEvent::NotFoundChecked {
            passed: check.is_passed(),
            detail,
        });
        self.enter(SCENARIO, ScenarioState::Done);
        check
    }
}
