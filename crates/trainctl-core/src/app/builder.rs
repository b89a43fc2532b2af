//! HarnessBuilder - harness の構築とワイヤリング
//!
//! # Fail-fast 設計
//! - transport が無ければ build() で BuildError
//! - base_url が URL として読めなければ BuildError
//! - not-found check 用の task_id が空なら BuildError
//! - それ以外の port は本番用のデフォルトで埋める

use std::sync::Arc;

use reqwest::Url;

use super::harness::Harness;
use crate::client::JobControlClient;
use crate::config::HarnessConfig;
use crate::domain::JobHandle;
use crate::impls::{StdinConfirmation, TracingEventSink};
use crate::ports::{Confirmation, EventSink, TokioWaiter, Transport, Waiter};

/// HarnessBuilder は Harness を構築
///
/// # 使用例
/// ```ignore
/// let harness = HarnessBuilder::new()
///     .config(HarnessConfig::default())
///     .transport(Arc::new(ReqwestTransport::new()?))
///     .build()?;
/// let report = harness.run().await;
/// ```
pub struct HarnessBuilder {
    config: HarnessConfig,
    transport: Option<Arc<dyn Transport>>,
    waiter: Option<Arc<dyn Waiter>>,
    confirmation: Option<Arc<dyn Confirmation>>,
    events: Option<Arc<dyn EventSink>>,
}

/// BuildError は harness 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("no transport configured")]
    MissingTransport,

    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unknown_task_id must not be empty")]
    EmptyUnknownTaskId,
}

impl HarnessBuilder {
    pub fn new() -> Self {
        Self {
            config: HarnessConfig::default(),
            transport: None,
            waiter: None,
            confirmation: None,
            events: None,
        }
    }

    pub fn config(mut self, config: HarnessConfig) -> Self {
        self.config = config;
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn waiter(mut self, waiter: Arc<dyn Waiter>) -> Self {
        self.waiter = Some(waiter);
        self
    }

    pub fn confirmation(mut self, confirmation: Arc<dyn Confirmation>) -> Self {
        self.confirmation = Some(confirmation);
        self
    }

    pub fn event_sink(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn build(self) -> Result<Harness, BuildError> {
        let transport = self.transport.ok_or(BuildError::MissingTransport)?;

        let base_url = &self.config.base_url;
        if let Err(e) = Url::parse(base_url) {
            return Err(BuildError::InvalidBaseUrl {
                url: base_url.clone(),
                reason: e.to_string(),
            });
        }

        let unknown_handle = JobHandle::new(self.config.unknown_task_id.clone())
            .map_err(|_| BuildError::EmptyUnknownTaskId)?;

        let client = JobControlClient::new(base_url.clone(), transport);
        Ok(Harness::new(
            client,
            self.config,
            unknown_handle,
            self.waiter.unwrap_or_else(|| Arc::new(TokioWaiter)),
            self.confirmation
                .unwrap_or_else(|| Arc::new(StdinConfirmation)),
            self.events.unwrap_or_else(|| Arc::new(TracingEventSink)),
        ))
    }
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::ScriptedTransport;

    #[test]
    fn build_success() {
        let harness = HarnessBuilder::new()
            .transport(Arc::new(ScriptedTransport::new()))
            .build();
        assert!(harness.is_ok());
    }

    #[test]
    fn build_without_transport() {
        let harness = HarnessBuilder::new().build();
        assert!(matches!(harness, Err(BuildError::MissingTransport)));
    }

    #[test]
    fn build_with_invalid_base_url() {
        let config = HarnessConfig {
            base_url: "not a url".to_string(),
            ..HarnessConfig::default()
        };
        let harness = HarnessBuilder::new()
            .config(config)
            .transport(Arc::new(ScriptedTransport::new()))
            .build();
        assert!(matches!(harness, Err(BuildError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn build_with_empty_unknown_task_id() {
        let config = HarnessConfig {
            unknown_task_id: String::new(),
            ..HarnessConfig::default()
        };
        let harness = HarnessBuilder::new()
            .config(config)
            .transport(Arc::new(ScriptedTransport::new()))
            .build();
        assert!(matches!(harness, Err(BuildError::EmptyUnknownTaskId)));
    }
}
