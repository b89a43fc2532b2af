//! Errors - エラー型と分類
//!
//! 各 client 操作は失敗をその場でタグ付きの `Result` に変換します。
//! どのエラーも panic や `?` でプロセス外に漏れることはなく、
//! Orchestrator は受け取った値を見て scenario を早期終了するだけです。

use thiserror::Error;

/// ErrorKind は失敗の運用分類
///
/// - TransportFailure: 応答そのものが得られなかった
/// - HttpError: 応答はあったが期待したステータスではない
/// - MalformedResponse: 200 だが必要なフィールドが無い / 空
/// - NotFound: `stop` に対する 404
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TransportFailure,
    HttpError,
    MalformedResponse,
    NotFound,
}

/// A request that did not produce the expected response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestFailure {
    #[error("transport failure: {reason}")]
    Transport { reason: String },

    #[error("unexpected HTTP status {status}: {body}")]
    Http { status: u16, body: String },
}

impl RequestFailure {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::TransportFailure,
            Self::Http { .. } => ErrorKind::HttpError,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { .. } => None,
            Self::Http { status, .. } => Some(*status),
        }
    }
}

/// Failure of `start`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("start request failed: {0}")]
    Request(#[from] RequestFailure),

    #[error("start returned HTTP 200 without a usable task_id: {body}")]
    MalformedResponse { body: String },
}

impl StartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Request(failure) => failure.kind(),
            Self::MalformedResponse { .. } => ErrorKind::MalformedResponse,
        }
    }
}

/// Failure of `list_running`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("running task query failed: {0}")]
pub struct QueryError(#[from] pub RequestFailure);

impl QueryError {
    pub fn kind(&self) -> ErrorKind {
        self.0.kind()
    }
}

/// Failure of `stop`.
///
/// 404 だけは区別する（negative scenario がこれを期待している）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StopError {
    #[error("task {task_id} not found: {body}")]
    NotFound { task_id: String, body: String },

    #[error("stop request failed: {0}")]
    Other(#[from] RequestFailure),
}

impl StopError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Other(failure) => failure.kind(),
        }
    }
}
