use crate::error::TransportError;
use crate::web::HttpClient;
use async_trait::async_trait;

// =========================================================
// 核心抽象层 (Transport Abstraction)
// =========================================================

/// 一次 GraphQL HTTP 请求
#[derive(Debug, Clone)]
pub struct GraphQlRequest {
    pub endpoint: String,
    /// operationName，便于日志与测试断言
    pub operation: &'static str,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl GraphQlRequest {
    pub fn new(endpoint: &str, operation: &'static str, body: String) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            operation,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// 原始 HTTP 响应
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// GraphQL 传输特性 (Trait)
/// (?Send) 是因为浏览器环境下 JsFuture 不是 Send 的
#[async_trait(?Send)]
pub trait GraphQlTransport {
    async fn send(&self, req: GraphQlRequest) -> Result<RawResponse, TransportError>;
}

// =========================================================
// 实现层: fetch 客户端 (Production)
// =========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl GraphQlTransport for FetchTransport {
    async fn send(&self, req: GraphQlRequest) -> Result<RawResponse, TransportError> {
        log::debug!("[HTTP] POST {} ({})", req.endpoint, req.operation);
        let mut builder = HttpClient::post(&req.endpoint);
        for (k, v) in &req.headers {
            builder = builder.header(k, v);
        }

        let response = builder.body(req.body).send().await?;
        let status = response.status();

        Ok(RawResponse {
            status,
            body: response.text().await?,
        })
    }
}

// =========================================================
// 测试工具: MockTransport
// =========================================================

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// 按顺序返回预设响应，并记录发出的请求
    pub struct MockTransport {
        responses: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
        pub requests: RefCell<Vec<GraphQlRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self {
                responses: RefCell::new(VecDeque::new()),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
            self.responses.borrow_mut().push_back(Ok(RawResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn respond_raw(self, status: u16, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(RawResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(self, error: TransportError) -> Self {
            self.responses.borrow_mut().push_back(Err(error));
            self
        }

        pub fn last_request(&self) -> GraphQlRequest {
            self.requests
                .borrow()
                .last()
                .cloned()
                .expect("no request was sent")
        }
    }

    #[async_trait(?Send)]
    impl GraphQlTransport for MockTransport {
        async fn send(&self, req: GraphQlRequest) -> Result<RawResponse, TransportError> {
            self.requests.borrow_mut().push(req);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Network("no scripted response".into())))
        }
    }
}
