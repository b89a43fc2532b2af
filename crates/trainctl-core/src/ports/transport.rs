//! Transport port - HTTP 1 往復の抽象化
//!
//! Transport はステータスコードと生の body を返すだけで、
//! 意味づけ（Up/Down、NotFound など）は client 側で行います。
//!
//! # 実装
//! - **ReqwestTransport**: 本番用（`impls::http`）
//! - **ScriptedTransport**: テスト用（`impls::scripted`）

use std::fmt;

use async_trait::async_trait;

use crate::domain::HttpOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// One outgoing request. Owned so implementations can record it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
            headers: Vec::new(),
        }
    }

    /// POST with a JSON body; declares the content type.
    pub fn post_json(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            body: Some(body.into()),
            headers: vec![(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )],
        }
    }

    /// Header value lookup (case-insensitive name).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Transport は HTTP リクエストを 1 回だけ実行
///
/// # 契約
/// - リトライしない
/// - タイムアウトは実装のデフォルトに任せる
/// - 接続失敗などは `HttpOutcome::TransportFailed` で返す（panic しない）
/// - リクエストごとのリソースはどの経路でも解放する
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, request: HttpRequest) -> HttpOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_json_declares_content_type() {
        let req = HttpRequest::post_json("http://localhost:8000/train", "{}");
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.body.as_deref(), Some("{}"));
    }

    #[test]
    fn get_has_no_body_or_headers() {
        let req = HttpRequest::get("http://localhost:8000/");
        assert!(req.body.is_none());
        assert!(req.header("Content-Type").is_none());
    }
}
