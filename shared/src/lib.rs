use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

/// 商品名称的最小长度（去除首尾空白后）
pub const MIN_NAME_LEN: usize = 2;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// GraphQL `Int` 是 32 位，数量字段同理
pub type ProductId = i32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// 创建与更新共用的 GraphQL 输入对象
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

impl ProductInput {
    /// 按服务端同样的规则校验输入
    pub fn validate(&self) -> Result<(), Vec<InputViolation>> {
        let mut violations = Vec::new();
        if self.name.trim().chars().count() < MIN_NAME_LEN {
            violations.push(InputViolation::NameTooShort);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            violations.push(InputViolation::NegativePrice);
        }
        if self.quantity < 0 {
            violations.push(InputViolation::NegativeQuantity);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            quantity: product.quantity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputViolation {
    NameTooShort,
    NegativePrice,
    NegativeQuantity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

impl AuthPayload {
    /// 返回非空白的 token
    pub fn usable_token(&self) -> Option<&str> {
        let token = self.token.trim();
        if token.is_empty() { None } else { Some(token) }
    }
}
