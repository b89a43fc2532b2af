//! Harness - 2 つの scenario を順番に実行する
//!
//! 1. happy path（status → start → wait → list → confirm → stop → wait → list）
//! 2. not-found check（存在しない task の stop が 404 になること）
//!
//! 2 は 1 の結果に関係なく必ず実行します。
//! どちらの失敗もプロセスを止めず、`HarnessReport` に記録されるだけです。

use std::sync::Arc;

use tracing::info;

use super::happy_path::HappyPathOutcome;
use super::not_found::NotFoundCheck;
use crate::client::JobControlClient;
use crate::config::HarnessConfig;
use crate::domain::{HarnessEvent, JobHandle, ScenarioName, ScenarioState};
use crate::ports::{Confirmation, EventSink, Waiter};

/// Runs the scenarios against one training service.
pub struct Harness {
    pub(super) client: JobControlClient,
    pub(super) config: HarnessConfig,
    pub(super) unknown_handle: JobHandle,
    pub(super) waiter: Arc<dyn Waiter>,
    pub(super) confirmation: Arc<dyn Confirmation>,
    events: Arc<dyn EventSink>,
}

/// Results of one full run.
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessReport {
    pub happy_path: HappyPathOutcome,
    pub not_found_check: NotFoundCheck,
}

impl HarnessReport {
    pub fn is_success(&self) -> bool {
        self.happy_path.is_success() && self.not_found_check.is_passed()
    }
}

impl Harness {
    pub(super) fn new(
        client: JobControlClient,
        config: HarnessConfig,
        unknown_handle: JobHandle,
        waiter: Arc<dyn Waiter>,
        confirmation: Arc<dyn Confirmation>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            client,
            config,
            unknown_handle,
            waiter,
            confirmation,
            events,
        }
    }

    pub fn client(&self) -> &JobControlClient {
        &self.client
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Run the happy path, then the not-found check.
    pub async fn run(&self) -> HarnessReport {
        info!(base_url = self.client.base_url(), "testing training job start and stop");
        let happy_path = self.run_happy_path().await;
        let not_found_check = self.run_not_found_check().await;

        let report = HarnessReport {
            happy_path,
            not_found_check,
        };
        info!(
            happy_path = ?report.happy_path.final_state(),
            not_found_check = report.not_found_check.is_passed(),
            success = report.is_success(),
            "harness finished"
        );
        report
    }

    pub(super) fn enter(&self, scenario: ScenarioName, state: ScenarioState) {
        self.emit(HarnessEvent::StateEntered { scenario, state });
    }

    pub(super) fn emit(&self, event: HarnessEvent) {
        self.events.emit(&event);
    }
}
