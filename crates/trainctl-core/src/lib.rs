//! trainctl-core
//!
//! Core building blocks for driving a remote training-job control service.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（JobHandle, JobRequestSpec, HttpOutcome, errors, states, events）
//! - **ports**: 抽象化レイヤー（Transport, Waiter, Confirmation, EventSink）
//! - **impls**: ports の実装（ReqwestTransport, ScriptedTransport, StdinConfirmation など）
//! - **extract**: 応答 body からのフィールド抽出
//! - **client**: JobControlClient（status / start / list_running / stop / submit）
//! - **app**: scenario の実行（HarnessBuilder, Harness）
//! - **config**: HarnessConfig

pub mod app;
pub mod client;
pub mod config;
pub mod domain;
pub mod extract;
pub mod impls;
pub mod ports;

pub use self::app::{Harness, HarnessBuilder, HarnessReport};
pub use self::client::JobControlClient;
pub use self::config::HarnessConfig;
