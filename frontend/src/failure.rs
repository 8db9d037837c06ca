//! 视图层的统一失败处理
//!
//! 拦截器已经处理了会话失效，这里只决定视图接下来做什么。

use crate::error::{ApiError, ErrorKind};
use crate::i18n::Msg;
use crate::notify::Notifier;
use crate::web::route::AppRoute;
use crate::web::router::RouterService;

/// 视图收到错误后的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureAction {
    /// 会话已被拦截器清除并跳转到登录页，视图不再处理
    SignedOut,
    /// 拦截器已经提示过（Access denied），视图不再重复提示
    AlreadyNotified,
    /// 提示后回到商品列表
    BackToList(Msg),
    /// 原地提示
    Notify(Msg),
}

impl FailureAction {
    /// `generic` 是当前视图的通用失败提示
    pub fn resolve(error: &ApiError, generic: Msg) -> Self {
        match error.kind {
            ErrorKind::Unauthenticated => Self::SignedOut,
            ErrorKind::Forbidden => Self::AlreadyNotified,
            ErrorKind::NotFound => Self::BackToList(Msg::ProductNotFound),
            _ => Self::Notify(generic),
        }
    }

    pub fn apply(self, notifier: &Notifier, router: &RouterService) {
        match self {
            Self::SignedOut | Self::AlreadyNotified => {}
            Self::BackToList(msg) => {
                notifier.error(msg);
                router.navigate_to(AppRoute::Products);
            }
            Self::Notify(msg) => notifier.error(msg),
        }
    }
}

/// 删除结果；除 `SignedOut` 外都要从服务端重新加载列表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed(Msg),
    SignedOut,
}

impl DeleteOutcome {
    pub fn resolve(result: &Result<bool, ApiError>) -> Self {
        match result {
            Ok(true) => Self::Deleted,
            Ok(false) => Self::Failed(Msg::DeleteFailed),
            Err(e) => match e.kind {
                ErrorKind::Unauthenticated => Self::SignedOut,
                ErrorKind::Forbidden => Self::Failed(Msg::ForbiddenDelete),
                _ => Self::Failed(Msg::DeleteFailed),
            },
        }
    }

    pub fn should_reload(&self) -> bool {
        !matches!(self, Self::SignedOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_failures() {
        let cases = [
            (ErrorKind::Unauthenticated, FailureAction::SignedOut),
            (ErrorKind::NotFound, FailureAction::BackToList(Msg::ProductNotFound)),
            (ErrorKind::Network, FailureAction::Notify(Msg::UpdateFailed)),
            (ErrorKind::Forbidden, FailureAction::AlreadyNotified),
        ];
        for (kind, expected) in cases {
            let error = ApiError::new(kind, "boom");
            assert_eq!(FailureAction::resolve(&error, Msg::UpdateFailed), expected, "{kind:?}");
        }
    }

    #[test]
    fn forbidden_gets_no_second_toast() {
        let error = ApiError::graphql(Some("FORBIDDEN"), "Forbidden");
        for generic in [Msg::CreateFailed, Msg::UpdateFailed, Msg::LoadProductsFailed] {
            assert_eq!(FailureAction::resolve(&error, generic), FailureAction::AlreadyNotified);
        }
    }

    #[test]
    fn delete_of_missing_product_fails_and_reloads() {
        let outcome = DeleteOutcome::resolve(&Err(ApiError::graphql(None, "Product not found")));
        assert_eq!(outcome, DeleteOutcome::Failed(Msg::DeleteFailed));
        assert!(outcome.should_reload());
    }

    #[test]
    fn delete_returning_false_is_a_failure() {
        assert_eq!(DeleteOutcome::resolve(&Ok(false)), DeleteOutcome::Failed(Msg::DeleteFailed));
        assert_eq!(DeleteOutcome::resolve(&Ok(true)), DeleteOutcome::Deleted);
    }

    #[test]
    fn forbidden_delete_has_its_own_message() {
        let outcome = DeleteOutcome::resolve(&Err(ApiError::graphql(Some("FORBIDDEN"), "Forbidden")));
        assert_eq!(outcome, DeleteOutcome::Failed(Msg::ForbiddenDelete));
    }

    #[test]
    fn signed_out_delete_does_not_reload() {
        let outcome = DeleteOutcome::resolve(&Err(ApiError::graphql(None, "Unauthorized")));
        assert_eq!(outcome, DeleteOutcome::SignedOut);
        assert!(!outcome.should_reload());
    }
}
