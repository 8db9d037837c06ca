//! 认证模块
//!
//! 登录 / 注销流程，只通过 [`SessionStore`] 记录认证状态。
//! 路由守卫读取同一个会话存储来判断是否已登录。

use catalog_shared::AuthPayload;
use thiserror::Error;

use crate::api::CatalogApi;
use crate::error::ErrorKind;
use crate::graphql::GraphQlTransport;
use crate::i18n::Msg;
use crate::session::SessionStore;
use crate::web::KeyValueStore;

/// 登录表单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// 登录表单的字段错误
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginFieldErrors {
    pub username: Option<Msg>,
    pub password: Option<Msg>,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), LoginFieldErrors> {
        let errors = LoginFieldErrors {
            username: self.username.trim().is_empty().then_some(Msg::UsernameRequired),
            password: self.password.is_empty().then_some(Msg::PasswordRequired),
        };
        if errors == LoginFieldErrors::default() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// 登录失败的类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginFailure {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("server unreachable")]
    Unreachable,
    #[error("token not received")]
    MissingToken,
}

impl LoginFailure {
    pub fn message(&self) -> Msg {
        match self {
            Self::InvalidCredentials => Msg::InvalidCredentials,
            Self::Unreachable => Msg::ServerUnreachable,
            Self::MissingToken => Msg::TokenMissing,
        }
    }
}

/// 登录并保存 token
///
/// 发起请求前先清除旧 token；任何失败都保证会话中没有 token。
/// 请求结束后无论成败都清空表单中的密码。
pub async fn login<T, S>(api: &CatalogApi<T, S>, form: &mut LoginForm) -> Result<AuthPayload, LoginFailure>
where
    T: GraphQlTransport,
    S: KeyValueStore,
{
    let session = api.session();
    session.clear_token();

    let result = match api.login(form.username.trim(), &form.password).await {
        Ok(Some(payload)) if payload.usable_token().is_some() => Ok(payload),
        Ok(_) => Err(LoginFailure::MissingToken),
        Err(e) if e.kind == ErrorKind::InvalidCredentials => Err(LoginFailure::InvalidCredentials),
        Err(e) => {
            log::warn!("[Auth] login failed: {}", e);
            Err(LoginFailure::Unreachable)
        }
    };
    form.password.clear();

    match &result {
        Ok(payload) => {
            session.set_token(&payload.token);
            log::info!("[Auth] signed in as {} ({})", payload.user.username, payload.user.role);
        }
        Err(failure) => {
            session.clear_token();
            log::info!("[Auth] sign-in rejected: {}", failure);
        }
    }
    result
}

/// 注销：清除 token，导航由调用方负责
pub fn logout<S: KeyValueStore>(session: &SessionStore<S>) {
    session.clear_token();
    log::info!("[Auth] signed out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{FAKE_TOKEN, FakeCatalogServer, fake_api, signed_in_storage};
    use crate::error::TransportError;
    use crate::graphql::GraphQlClient;
    use crate::graphql::client::tests::RecordingHooks;
    use crate::graphql::transport::tests::MockTransport;
    use crate::session::STORAGE_TOKEN_KEY;
    use crate::web::MemoryStorage;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn both_fields_are_required() {
        assert_eq!(
            form("   ", "").validate(),
            Err(LoginFieldErrors {
                username: Some(Msg::UsernameRequired),
                password: Some(Msg::PasswordRequired),
            })
        );
        assert_eq!(form("admin", " ").validate(), Ok(()));
    }

    #[tokio::test]
    async fn successful_login_stores_the_exact_token() {
        let storage = MemoryStorage::new();
        let (api, _) = fake_api(FakeCatalogServer::default(), storage.clone());

        let mut submitted = form(" admin ", "secret");
        let payload = login(&api, &mut submitted).await.unwrap();

        assert_eq!(payload.user.username, "admin");
        assert_eq!(submitted.password, "");
        assert_eq!(storage.raw(STORAGE_TOKEN_KEY).as_deref(), Some(FAKE_TOKEN));
    }

    #[tokio::test]
    async fn failed_login_leaves_no_token() {
        let storage = signed_in_storage().with(STORAGE_TOKEN_KEY, "previous-session");
        let (api, _) = fake_api(FakeCatalogServer::default(), storage.clone());

        let mut submitted = form("admin", "nope");
        let failure = login(&api, &mut submitted).await.unwrap_err();

        assert_eq!(failure, LoginFailure::InvalidCredentials);
        assert_eq!(failure.message(), Msg::InvalidCredentials);
        assert_eq!(submitted, form("admin", ""));
        assert_eq!(storage.raw(STORAGE_TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn blank_token_in_response_is_a_failure() {
        let storage = MemoryStorage::new();
        let (api, _) = fake_api(FakeCatalogServer::without_token(), storage.clone());

        let failure = login(&api, &mut form("admin", "secret")).await.unwrap_err();

        assert_eq!(failure, LoginFailure::MissingToken);
        assert_eq!(storage.raw(STORAGE_TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn network_failure_is_reported_as_unreachable() {
        let storage = signed_in_storage();
        let transport = MockTransport::new().fail(TransportError::Network("offline".into()));
        let api = CatalogApi::new(GraphQlClient::new(
            "http://localhost/graphql",
            transport,
            SessionStore::new(storage.clone()),
            Arc::new(RecordingHooks::default()),
        ));

        let mut submitted = form("admin", "secret");
        let failure = login(&api, &mut submitted).await.unwrap_err();

        assert_eq!(failure.message(), Msg::ServerUnreachable);
        assert_eq!(submitted.password, "");
        assert_eq!(storage.raw(STORAGE_TOKEN_KEY), None);
    }

    #[test]
    fn logout_clears_session() {
        let storage = signed_in_storage();
        let session = SessionStore::new(storage.clone());

        logout(&session);

        assert!(!session.is_logged_in());
        assert_eq!(storage.raw(STORAGE_TOKEN_KEY), None);
    }
}
