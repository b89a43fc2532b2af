//! Domain identifiers.
//!
//! # JobHandle
//! 訓練サービスが `/train` の応答で返す `task_id` を包む不透明な型です。
//! 中身の構造（`train_<lr>_<epochs>_<timestamp>` など）には依存しません。
//! 使うのは「一意であること」と「そのまま送り返せること」だけです。
//!
//! ## 空文字列を許さない
//! 空の ID から JobHandle は作れません。`start` が空の `task_id` を返した場合は
//! ハンドルが作られないので、後続の `stop` は型レベルで呼べなくなります。

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a training job started on the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobHandle {
    task_id: String,
}

/// Returned when a handle is built from an empty identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("task_id must not be empty")]
pub struct EmptyTaskId;

impl JobHandle {
    /// 空でない ID から JobHandle を作成
    pub fn new(task_id: impl Into<String>) -> Result<Self, EmptyTaskId> {
        let task_id = task_id.into();
        if task_id.is_empty() {
            return Err(EmptyTaskId);
        }
        Ok(Self { task_id })
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }
}

impl TryFrom<String> for JobHandle {
    type Error = EmptyTaskId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JobHandle> for String {
    fn from(handle: JobHandle) -> Self {
        handle.task_id
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_task_id_is_rejected() {
        assert_eq!(JobHandle::new(""), Err(EmptyTaskId));
    }

    #[test]
    fn handle_keeps_the_identifier_verbatim() {
        let handle = JobHandle::new("train_0.001_10_123").unwrap();
        assert_eq!(handle.task_id(), "train_0.001_10_123");
        assert_eq!(handle.to_string(), "train_0.001_10_123");
    }

    #[test]
    fn handle_serializes_as_plain_string() {
        let handle = JobHandle::new("abc").unwrap();
        let s = serde_json::to_string(&handle).unwrap();
        assert_eq!(s, "\"abc\"");

        // 空文字列はデシリアライズでも弾く
        let err = serde_json::from_str::<JobHandle>("\"\"");
        assert!(err.is_err());
    }
}
