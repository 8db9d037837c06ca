//! GraphQL 客户端
//!
//! 请求流程：装饰（Bearer 头）-> 发送（no-store）-> 检查（错误拦截器）-> 归一化。
//! 拦截器通过 [`ClientHooks`] 与界面通信，因此可以脱离浏览器测试。

use std::sync::Arc;

use catalog_shared::protocol::GraphQlOperation;
use catalog_shared::{BEARER_PREFIX, HEADER_AUTHORIZATION};
use serde::Serialize;

use super::response::GraphQlResponse;
use super::transport::{GraphQlRequest, GraphQlTransport};
use crate::error::{ApiError, ErrorKind, TransportError};
use crate::session::SessionStore;
use crate::web::KeyValueStore;

/// 拦截器发出的全局提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    AccessDenied,
    SessionExpired,
    ServerUnreachable,
}

/// 拦截器对界面的回调
pub trait ClientHooks {
    fn notify(&self, notice: Notice);
    fn redirect_to_login(&self);
}

#[derive(Serialize)]
struct RequestBody<'a, V> {
    query: &'a str,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
    variables: &'a V,
}

#[derive(Clone)]
pub struct GraphQlClient<T, S> {
    endpoint: String,
    transport: T,
    session: SessionStore<S>,
    hooks: Arc<dyn ClientHooks + Send + Sync>,
}

impl<T, S> GraphQlClient<T, S>
where
    T: GraphQlTransport,
    S: KeyValueStore,
{
    pub fn new(
        endpoint: impl Into<String>,
        transport: T,
        session: SessionStore<S>,
        hooks: Arc<dyn ClientHooks + Send + Sync>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
            session,
            hooks,
        }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// 执行一个操作，返回归一化后的结果
    pub async fn execute<O: GraphQlOperation>(&self, operation: &O) -> Result<O::Output, ApiError> {
        let request = self.build_request(operation)?;
        log::debug!(
            "[GraphQL] -> {} (authenticated: {})",
            O::NAME,
            request.header(HEADER_AUTHORIZATION).is_some()
        );

        let raw = match self.transport.send(request).await {
            Ok(raw) => raw,
            Err(e) => return Err(self.unreachable(O::NAME, e)),
        };

        let response: GraphQlResponse<O::Data> = match serde_json::from_str(&raw.body) {
            Ok(response) => response,
            Err(_) if !raw.ok() => {
                return Err(self.unreachable(O::NAME, TransportError::Status(raw.status)));
            }
            Err(e) => {
                log::error!("[GraphQL] {} returned an unreadable body: {}", O::NAME, e);
                return Err(ApiError::decode(e.to_string()));
            }
        };

        // 非 2xx 且没有 GraphQL 错误：代理或网关的错误页
        if !raw.ok() && response.errors.is_empty() {
            return Err(self.unreachable(O::NAME, TransportError::Status(raw.status)));
        }

        if !response.errors.is_empty() {
            let errors: Vec<ApiError> = response
                .errors
                .iter()
                .map(|e| ApiError::graphql(e.code(), e.message.clone()))
                .collect();
            return Err(self.intercept(O::NAME, errors));
        }

        Ok(O::output(response.data))
    }

    fn build_request<O: GraphQlOperation>(&self, operation: &O) -> Result<GraphQlRequest, ApiError> {
        let body = serde_json::to_string(&RequestBody {
            query: O::DOCUMENT,
            operation_name: O::NAME,
            variables: operation,
        })
        .map_err(|e| ApiError::new(ErrorKind::Other, e.to_string()))?;

        let request = GraphQlRequest::new(&self.endpoint, O::NAME, body);
        Ok(match self.session.token() {
            Some(token) => {
                request.with_header(HEADER_AUTHORIZATION, &format!("{}{}", BEARER_PREFIX, token))
            }
            None => request,
        })
    }

    fn unreachable(&self, operation: &str, error: TransportError) -> ApiError {
        log::warn!("[GraphQL] {} failed: {}", operation, error);
        self.hooks.notify(Notice::ServerUnreachable);
        error.into()
    }

    /// 错误拦截器：第一个 Forbidden / Unauthenticated 错误触发全局处理并结束检查
    fn intercept(&self, operation: &str, mut errors: Vec<ApiError>) -> ApiError {
        let handled = errors
            .iter()
            .position(|e| matches!(e.kind, ErrorKind::Forbidden | ErrorKind::Unauthenticated));

        let Some(index) = handled else {
            log::warn!("[GraphQL] {} returned an error: {}", operation, errors[0]);
            return errors.swap_remove(0);
        };

        let error = errors.swap_remove(index);
        if error.is_unauthenticated() {
            log::info!("[GraphQL] session rejected during {}, signing out", operation);
            self.session.clear_token();
            self.hooks.notify(Notice::SessionExpired);
            self.hooks.redirect_to_login();
        } else {
            log::warn!("[GraphQL] {} forbidden: {}", operation, error.message);
            self.hooks.notify(Notice::AccessDenied);
        }
        error
    }
}

// =========================================================
// 测试工具: RecordingHooks
// =========================================================

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::graphql::transport::tests::MockTransport;
    use crate::session::STORAGE_TOKEN_KEY;
    use crate::web::MemoryStorage;
    use catalog_shared::protocol::{DeleteProductMutation, ProductsQuery};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;

    /// 记录拦截器的所有回调
    #[derive(Default)]
    pub struct RecordingHooks {
        pub notices: Mutex<Vec<Notice>>,
        pub redirects: Mutex<usize>,
    }

    impl RecordingHooks {
        pub fn notices(&self) -> Vec<Notice> {
            self.notices.lock().unwrap().clone()
        }

        pub fn redirects(&self) -> usize {
            *self.redirects.lock().unwrap()
        }
    }

    impl ClientHooks for RecordingHooks {
        fn notify(&self, notice: Notice) {
            self.notices.lock().unwrap().push(notice);
        }

        fn redirect_to_login(&self) {
            *self.redirects.lock().unwrap() += 1;
        }
    }

    fn client(
        transport: MockTransport,
        storage: MemoryStorage,
    ) -> (GraphQlClient<MockTransport, MemoryStorage>, Arc<RecordingHooks>) {
        let hooks = Arc::new(RecordingHooks::default());
        let client = GraphQlClient::new(
            "http://localhost/graphql",
            transport,
            SessionStore::new(storage),
            hooks.clone(),
        );
        (client, hooks)
    }

    fn unauthenticated() -> serde_json::Value {
        json!({
            "data": null,
            "errors": [{ "message": "Unauthorized", "extensions": { "code": "UNAUTHENTICATED" } }]
        })
    }

    #[tokio::test]
    async fn attaches_bearer_header_when_token_present() {
        let transport = MockTransport::new().respond(200, json!({ "data": { "products": [] } }));
        let storage = MemoryStorage::new().with(STORAGE_TOKEN_KEY, "tok-1");
        let (client, _) = client(transport, storage);

        client.execute(&ProductsQuery {}).await.unwrap();

        let sent = client.transport.last_request();
        assert_eq!(sent.header("authorization"), Some("Bearer tok-1"));
        assert_eq!(sent.operation, "Products");

        let body: serde_json::Value = serde_json::from_str(&sent.body).unwrap();
        assert_eq!(body["operationName"], "Products");
        assert_eq!(body["variables"], json!({}));
        assert!(body["query"].as_str().unwrap().starts_with("query Products"));
    }

    #[tokio::test]
    async fn no_header_without_token() {
        let transport = MockTransport::new().respond(200, json!({ "data": { "products": [] } }));
        let (client, _) = client(transport, MemoryStorage::new());

        client.execute(&ProductsQuery {}).await.unwrap();

        assert_eq!(client.transport.last_request().header(HEADER_AUTHORIZATION), None);
    }

    #[tokio::test]
    async fn unauthenticated_evicts_session_on_any_operation() {
        let transport = MockTransport::new()
            .respond(200, unauthenticated())
            .respond(200, unauthenticated());
        let storage = MemoryStorage::new().with(STORAGE_TOKEN_KEY, "stale");
        let (client, hooks) = client(transport, storage.clone());

        let err = client.execute(&ProductsQuery {}).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
        assert_eq!(storage.raw(STORAGE_TOKEN_KEY), None);

        storage.set(STORAGE_TOKEN_KEY, "stale-again");
        let err = client.execute(&DeleteProductMutation { id: 1 }).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
        assert_eq!(storage.raw(STORAGE_TOKEN_KEY), None);

        assert_eq!(hooks.redirects(), 2);
        assert_eq!(hooks.notices(), vec![Notice::SessionExpired, Notice::SessionExpired]);
    }

    #[tokio::test]
    async fn message_only_unauthorized_is_intercepted() {
        let transport = MockTransport::new()
            .respond(200, json!({ "data": null, "errors": [{ "message": "Invalid token" }] }));
        let storage = MemoryStorage::new().with(STORAGE_TOKEN_KEY, "t");
        let (client, hooks) = client(transport, storage.clone());

        client.execute(&ProductsQuery {}).await.unwrap_err();

        assert_eq!(storage.raw(STORAGE_TOKEN_KEY), None);
        assert_eq!(hooks.redirects(), 1);
    }

    #[tokio::test]
    async fn forbidden_notifies_without_signing_out() {
        let transport = MockTransport::new().respond(
            200,
            json!({
                "data": null,
                "errors": [
                    { "message": "Validation error: name" },
                    { "message": "Forbidden", "extensions": { "code": "FORBIDDEN" } }
                ]
            }),
        );
        let storage = MemoryStorage::new().with(STORAGE_TOKEN_KEY, "t");
        let (client, hooks) = client(transport, storage.clone());

        let err = client.execute(&DeleteProductMutation { id: 9 }).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(hooks.notices(), vec![Notice::AccessDenied]);
        assert_eq!(hooks.redirects(), 0);
        assert_eq!(storage.raw(STORAGE_TOKEN_KEY).as_deref(), Some("t"));
    }

    #[tokio::test]
    async fn other_errors_pass_through_silently() {
        let transport = MockTransport::new()
            .respond(200, json!({ "data": null, "errors": [{ "message": "Product not found" }] }));
        let (client, hooks) = client(transport, MemoryStorage::new());

        let err = client.execute(&DeleteProductMutation { id: 9 }).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(hooks.notices().is_empty());
    }

    #[tokio::test]
    async fn transport_failures_report_server_unreachable() {
        let transport = MockTransport::new()
            .fail(TransportError::Network("connection refused".into()))
            .respond_raw(502, "<html>Bad Gateway</html>");
        let (client, hooks) = client(transport, MemoryStorage::new());

        let first = client.execute(&ProductsQuery {}).await.unwrap_err();
        let second = client.execute(&ProductsQuery {}).await.unwrap_err();

        assert_eq!(first.kind, ErrorKind::Network);
        assert_eq!(second.kind, ErrorKind::Network);
        assert_eq!(
            hooks.notices(),
            vec![Notice::ServerUnreachable, Notice::ServerUnreachable]
        );
    }

    #[tokio::test]
    async fn graphql_errors_on_non_2xx_status_are_still_classified() {
        let transport = MockTransport::new().respond(401, unauthenticated());
        let storage = MemoryStorage::new().with(STORAGE_TOKEN_KEY, "t");
        let (client, hooks) = client(transport, storage);

        let err = client.execute(&ProductsQuery {}).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Unauthenticated);
        assert_eq!(hooks.notices(), vec![Notice::SessionExpired]);
    }

    #[tokio::test]
    async fn non_2xx_json_without_errors_is_server_unreachable() {
        let transport = MockTransport::new()
            .respond(502, json!({ "error": "upstream timed out" }))
            .respond(500, json!({ "data": null }));
        let (client, hooks) = client(transport, MemoryStorage::new());

        let listed = client.execute(&ProductsQuery {}).await.unwrap_err();
        let deleted = client.execute(&DeleteProductMutation { id: 1 }).await.unwrap_err();

        assert_eq!(listed.kind, ErrorKind::Network);
        assert_eq!(deleted.kind, ErrorKind::Network);
        assert_eq!(
            hooks.notices(),
            vec![Notice::ServerUnreachable, Notice::ServerUnreachable]
        );
    }

    #[tokio::test]
    async fn unreadable_success_body_is_a_decode_error() {
        let transport = MockTransport::new().respond_raw(200, "not json");
        let (client, hooks) = client(transport, MemoryStorage::new());

        let err = client.execute(&ProductsQuery {}).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Decode);
        assert!(hooks.notices().is_empty());
    }
}
