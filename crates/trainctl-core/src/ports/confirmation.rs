//! Confirmation port - yes/no の判断を外から注入
//!
//! happy path scenario で唯一ブロックする地点です。
//! 本番では標準入力（`impls::stdin`）、テストでは固定の答えを使います。

use async_trait::async_trait;

/// Confirmation は「この job を止めるか？」に答える
#[async_trait]
pub trait Confirmation: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Always gives the same answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

#[async_trait]
impl Confirmation for FixedAnswer {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// Interpret a typed answer: "y" or "yes" in any case means yes.
pub fn parse_answer(input: &str) -> bool {
    let answer = input.trim_end_matches(['\r', '\n']).to_lowercase();
    answer == "y" || answer == "yes"
}
