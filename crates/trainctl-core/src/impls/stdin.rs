//! StdinConfirmation - 標準入力から yes/no を読む
//!
//! プロンプトを stdout に出して 1 行読みます。
//! EOF や読み込みエラーは「止めない」として扱います。

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::warn;

use crate::ports::{Confirmation, parse_answer};

#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirmation;

#[async_trait]
impl Confirmation for StdinConfirmation {
    async fn confirm(&self, prompt: &str) -> bool {
        let mut stdout = tokio::io::stdout();
        if let Err(e) = stdout.write_all(prompt.as_bytes()).await {
            warn!(error = %e, "failed to write prompt");
        }
        let _ = stdout.flush().await;

        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        match reader.read_line(&mut line).await {
            Ok(0) => false,
            Ok(_) => parse_answer(&line),
            Err(e) => {
                warn!(error = %e, "failed to read answer");
                false
            }
        }
    }
}
