//! State - scenario の状態
//!
//! # 状態遷移（happy path）
//! ```text
//! CheckingStatus -> Starting -> Waiting(5s) -> ListingRunning -> AwaitingConfirmation
//!     -> Stopping -> Waiting(2s) -> ListingRunning -> Done
//!     -> Done                        (stop しない)
//! CheckingStatus -> AbortedServiceDown
//! Starting       -> AbortedStartFailed
//! ```
//!
//! # 状態遷移（not-found check）
//! ```text
//! Stopping -> Done
//! ```

use std::fmt;
use std::time::Duration;

/// Which scenario a state or event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioName {
    /// start → poll → optional stop
    HappyPath,
    /// stop of a job the service does not know
    StopUnknownJob,
}

impl fmt::Display for ScenarioName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HappyPath => f.write_str("happy_path"),
            Self::StopUnknownJob => f.write_str("stop_unknown_job"),
        }
    }
}

/// ScenarioState は scenario の現在位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioState {
    CheckingStatus,
    Starting,
    Waiting(Duration),
    ListingRunning,
    AwaitingConfirmation,
    Stopping,
    Done,
    AbortedServiceDown,
    AbortedStartFailed,
}

impl ScenarioState {
    /// 終端状態かどうか
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Done | Self::AbortedServiceDown | Self::AbortedStartFailed
        )
    }
}

impl fmt::Display for ScenarioState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckingStatus => f.write_str("checking_status"),
            Self::Starting => f.write_str("starting"),
            Self::Waiting(d) => write!(f, "waiting({}ms)", d.as_millis()),
            Self::ListingRunning => f.write_str("listing_running"),
            Self::AwaitingConfirmation => f.write_str("awaiting_confirmation"),
            Self::Stopping => f.write_str("stopping"),
            Self::Done => f.write_str("done"),
            Self::AbortedServiceDown => f.write_str("aborted_service_down"),
            Self::AbortedStartFailed => f.write_str("aborted_start_failed"),
        }
    }
}
