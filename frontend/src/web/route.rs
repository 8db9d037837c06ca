//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性，以及导航守卫的判定规则。

use catalog_shared::ProductId;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 商品列表 (需要认证)
    Products,
    /// 新建商品 (需要认证)
    NewProduct,
    /// 编辑商品 (需要认证)；标识缺失或非法时为 None
    EditProduct(Option<ProductId>),
    /// 未匹配的路径
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match segments.as_slice() {
            [] => Self::Products,
            ["login"] => Self::Login,
            ["products"] => Self::Products,
            ["products", "new"] => Self::NewProduct,
            ["products", id, "edit"] => Self::EditProduct(parse_product_id(id)),
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Products => "/products".to_string(),
            Self::NewProduct => "/products/new".to_string(),
            Self::EditProduct(Some(id)) => format!("/products/{}/edit", id),
            Self::EditProduct(None) => "/products/0/edit".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::NotFound)
    }

    /// 守卫：返回真正应当激活的路由
    ///
    /// - 未匹配的路径一律回到登录页
    /// - 受保护路由在没有 token 时回到登录页
    pub fn guard(self, has_token: bool) -> Self {
        match self {
            Self::NotFound => Self::auth_failure_redirect(),
            route if route.requires_auth() && !has_token => Self::auth_failure_redirect(),
            route => route,
        }
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Products
    }
}

/// 只接受正整数标识
fn parse_product_id(raw: &str) -> Option<ProductId> {
    raw.parse::<ProductId>().ok().filter(|id| *id > 0)
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
