//! Catalog Admin 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义与守卫（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `graphql`: GraphQL 客户端与错误拦截器
//! - `api`: 商品目录数据访问服务
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod confirm_delete_dialog;
    pub mod create_product;
    pub mod edit_product;
    mod icons;
    pub mod layout;
    pub mod login;
    pub mod product_form;
    pub mod products;
}
mod config;
mod error;
mod failure;
mod i18n;
mod notify;
mod preferences;
mod session;

pub(crate) mod graphql {
    pub mod client;
    mod response;
    pub mod transport;

    pub use client::{ClientHooks, GraphQlClient, Notice};
    pub use transport::{FetchTransport, GraphQlTransport};
}

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod dom;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::HttpClient;
    #[cfg(test)]
    pub use storage::MemoryStorage;
    pub use storage::{KeyValueStore, LocalStorage};
}

use std::sync::Arc;

use crate::api::CatalogApi;
use crate::components::create_product::CreateProductPage;
use crate::components::edit_product::EditProductPage;
use crate::components::layout::Layout;
use crate::components::login::LoginPage;
use crate::components::products::ProductsPage;
use crate::config::AppConfig;
use crate::graphql::{ClientHooks, FetchTransport, GraphQlClient, Notice};
use crate::i18n::{Msg, provide_i18n};
use crate::notify::{Notifier, ToastStack, provide_notifier};
use crate::preferences::Preferences;
use crate::session::SessionStore;
use crate::web::LocalStorage;
use crate::web::dom::{BodyTheme, apply_language};

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{RouterOutlet, RouterService, provide_router};

/// 浏览器中使用的数据访问服务
pub(crate) type Api = CatalogApi<FetchTransport, LocalStorage>;

/// 全局共享的服务
#[derive(Clone)]
pub(crate) struct AppContext {
    pub api: Api,
    pub session: SessionStore<LocalStorage>,
    pub preferences: Preferences<LocalStorage>,
}

pub(crate) fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// 拦截器的界面落地：提示 + 跳转登录页
struct UiHooks {
    notifier: Notifier,
    router: RouterService,
}

impl ClientHooks for UiHooks {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::AccessDenied => self.notifier.error(Msg::AccessDenied),
            Notice::SessionExpired => self.notifier.info(Msg::SessionExpired),
            Notice::ServerUnreachable => self.notifier.error(Msg::ServerUnreachable),
        }
    }

    fn redirect_to_login(&self) {
        self.router.navigate_to(AppRoute::auth_failure_redirect());
    }
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件，受保护页面包在 Layout 中。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login | AppRoute::NotFound => view! { <LoginPage /> }.into_any(),
        AppRoute::Products => view! { <Layout><ProductsPage /></Layout> }.into_any(),
        AppRoute::NewProduct => view! { <Layout><CreateProductPage /></Layout> }.into_any(),
        AppRoute::EditProduct(id) => view! { <Layout><EditProductPage id=id /></Layout> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("[App] GraphQL endpoint: {}", config.graphql_endpoint);

    // 1. 偏好设置：启动时应用主题与语言
    let preferences = Preferences::new(LocalStorage);
    preferences.apply_saved_theme(&BodyTheme);
    let language = preferences.language();
    apply_language(language);
    provide_i18n(language);

    let notifier = provide_notifier(config.toast_duration);

    // 2. 路由服务：注入认证检查（会话存储中有非空 token）
    let session = SessionStore::new(LocalStorage);
    let router = provide_router(Signal::derive(move || session.is_logged_in()));

    // 3. GraphQL 客户端与数据访问服务
    let hooks = Arc::new(UiHooks { notifier, router });
    let client = GraphQlClient::new(config.graphql_endpoint, FetchTransport, session, hooks);
    provide_context(AppContext {
        api: CatalogApi::new(client),
        session,
        preferences,
    });

    view! {
        <RouterOutlet matcher=route_matcher />
        <ToastStack />
    }
}
