//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **ReqwestTransport**: 本番用の HTTP transport
//! - **ScriptedTransport**: 開発用・テスト用の transport（応答を台本で返す）
//! - **StdinConfirmation**: 標準入力での確認
//! - **TracingEventSink**: tracing へのイベント出力
//! - **RecordingWaiter**: 待たずに待ち時間だけ記録する waiter（テスト用）

pub mod http;
pub mod recording_waiter;
pub mod scripted;
pub mod stdin;
pub mod tracing_sink;

// 主要な型を再エクスポート
pub use self::http::ReqwestTransport;
pub use self::recording_waiter::RecordingWaiter;
pub use self::scripted::ScriptedTransport;
pub use self::stdin::StdinConfirmation;
pub use self::tracing_sink::TracingEventSink;
