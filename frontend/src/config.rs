//! 应用配置
//!
//! 浏览器中没有运行时环境变量，因此在编译期读取可选的覆盖值，
//! 未设置时使用下面的默认常量。

use std::time::Duration;

/// 这些是默认值，如果构建时没有定义对应的环境变量，则使用这些值
const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://127.0.0.1:8000/graphql";
const DEFAULT_TOAST_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// GraphQL 端点
    pub graphql_endpoint: String,
    /// 通知自动消失的时间
    pub toast_duration: Duration,
}

impl AppConfig {
    /// 读取 `CATALOG_GRAPHQL_ENDPOINT` / `CATALOG_TOAST_MS`
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("CATALOG_GRAPHQL_ENDPOINT"),
            option_env!("CATALOG_TOAST_MS"),
        )
    }

    fn from_overrides(endpoint: Option<&str>, toast_ms: Option<&str>) -> Self {
        let graphql_endpoint = endpoint
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_GRAPHQL_ENDPOINT)
            .to_string();

        let toast_ms = toast_ms
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TOAST_MS);

        Self {
            graphql_endpoint,
            toast_duration: Duration::from_millis(toast_ms),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_overrides(None, None)
    }
}
