//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は harness の外側（HTTP、時間、利用者の入力、表示）への
//! インターフェースを提供し、実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - Orchestrator は trait だけに依存する
//! - テストでは本物の sleep / stdin / ネットワークを使わずに済む

pub mod confirmation;
pub mod event_sink;
pub mod transport;
pub mod waiter;

// 主要な trait を再エクスポート
pub use self::confirmation::{Confirmation, FixedAnswer, parse_answer};
pub use self::event_sink::{EventSink, MemoryEventSink};
pub use self::transport::{HttpMethod, HttpRequest, Transport};
pub use self::waiter::{TokioWaiter, Waiter};
