use thiserror::Error;

// =========================================================
// 传输层错误
// =========================================================

/// HTTP 传输错误：请求没能拿到一个可读的响应
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// 请求构建失败
    #[error("request build failed: {0}")]
    RequestBuild(String),
    /// 网络请求失败
    #[error("network error: {0}")]
    Network(String),
    /// 响应读取失败
    #[error("response read failed: {0}")]
    ResponseRead(String),
    /// 非 2xx 且响应体不是 GraphQL 格式
    #[error("unexpected HTTP status {0}")]
    Status(u16),
}

// =========================================================
// 错误分类
// =========================================================

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 服务器不可达或传输失败
    Network,
    /// 未认证 / token 失效
    Unauthenticated,
    /// 已认证但无权限
    Forbidden,
    /// 资源不存在
    NotFound,
    /// 登录凭据错误
    InvalidCredentials,
    /// 服务端输入校验失败
    Validation,
    /// 响应无法解析
    Decode,
    Other,
}

impl ErrorKind {
    /// 按 `extensions.code` 分类，缺失时退回到消息匹配
    pub fn classify(code: Option<&str>, message: &str) -> Self {
        code.and_then(Self::from_code)
            .unwrap_or_else(|| Self::from_message(message))
    }

    /// 结构化错误码
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "UNAUTHENTICATED" => Some(Self::Unauthenticated),
            "FORBIDDEN" => Some(Self::Forbidden),
            "NOT_FOUND" => Some(Self::NotFound),
            "BAD_USER_INPUT" => Some(Self::Validation),
            _ => None,
        }
    }

    /// 服务端只抛出普通异常时没有错误码，只能看消息
    fn from_message(message: &str) -> Self {
        let msg = message.to_lowercase();
        if msg.contains("invalid credentials") {
            Self::InvalidCredentials
        } else if msg.contains("unauthorized")
            || msg.contains("unauthenticated")
            || msg.contains("invalid token")
        {
            Self::Unauthenticated
        } else if msg.contains("forbidden") {
            Self::Forbidden
        } else if msg.contains("not found") {
            Self::NotFound
        } else if msg.contains("validation error") {
            Self::Validation
        } else {
            Self::Other
        }
    }

    /// 获取机器可读的错误代码
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network => "NETWORK_ERROR",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Validation => "BAD_USER_INPUT",
            Self::Decode => "DECODE_ERROR",
            Self::Other => "INTERNAL_ERROR",
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

/// API 调用错误：类别 + 消息
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{}] {message}", .kind.error_code())]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    // --- Convenience constructors ---

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    /// 从 GraphQL 错误条目构造
    pub fn graphql(code: Option<&str>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(ErrorKind::classify(code, &message), message)
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.kind == ErrorKind::Unauthenticated
    }
}

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        ApiError::network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_code_wins_over_message() {
        assert_eq!(
            ErrorKind::classify(Some("FORBIDDEN"), "Product not found"),
            ErrorKind::Forbidden
        );
        assert_eq!(
            ErrorKind::classify(Some("UNAUTHENTICATED"), "whatever"),
            ErrorKind::Unauthenticated
        );
    }

    #[test]
    fn unknown_code_falls_back_to_message() {
        assert_eq!(
            ErrorKind::classify(Some("INTERNAL_SERVER_ERROR"), "Product not found"),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn message_fallback_matches_server_exceptions() {
        let cases = [
            ("Unauthorized", ErrorKind::Unauthenticated),
            ("Invalid token", ErrorKind::Unauthenticated),
            ("Forbidden", ErrorKind::Forbidden),
            ("Product not found", ErrorKind::NotFound),
            ("Invalid credentials", ErrorKind::InvalidCredentials),
            ("Validation error: price", ErrorKind::Validation),
            ("division by zero", ErrorKind::Other),
        ];
        for (message, kind) in cases {
            assert_eq!(ErrorKind::classify(None, message), kind, "{message}");
        }
    }

    #[test]
    fn display_carries_code_and_message() {
        let err = ApiError::graphql(None, "Product not found");
        assert_eq!(err.to_string(), "[NOT_FOUND] Product not found");
    }

    #[test]
    fn transport_failures_become_network_errors() {
        let err: ApiError = TransportError::Status(502).into();
        assert_eq!(err.kind, ErrorKind::Network);
        assert!(err.message.contains("502"));
    }
}
