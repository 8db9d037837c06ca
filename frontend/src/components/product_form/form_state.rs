//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 从已有商品回填
//! - 校验并转换为 `ProductInput`

use catalog_shared::{InputViolation, Product, ProductInput};
use leptos::prelude::*;

use crate::i18n::Msg;

/// 表单的原始文本值，校验前不做任何解析
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
}

/// 每个字段至多一条错误
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFormErrors {
    pub name: Option<Msg>,
    pub price: Option<Msg>,
    pub quantity: Option<Msg>,
}

impl ProductFormErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ProductDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
        }
    }

    /// 校验并生成请求输入
    pub fn validate(&self) -> Result<ProductInput, ProductFormErrors> {
        let mut errors = ProductFormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some(Msg::NameRequired);
        }

        let price = match self.price.trim() {
            "" => {
                errors.price = Some(Msg::PriceRequired);
                None
            }
            raw => match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => {
                    errors.price = Some(Msg::PriceInvalid);
                    None
                }
            },
        };

        let quantity = match self.quantity.trim() {
            "" => {
                errors.quantity = Some(Msg::QuantityRequired);
                None
            }
            raw => raw.parse::<i32>().ok().or_else(|| {
                errors.quantity = Some(Msg::QuantityInvalid);
                None
            }),
        };

        let description = self.description.trim();
        let input = ProductInput {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            price: price.unwrap_or_default(),
            quantity: quantity.unwrap_or_default(),
        };

        // 数值规则与服务端共用
        if let Err(violations) = input.validate() {
            for violation in violations {
                match violation {
                    InputViolation::NameTooShort => {
                        errors.name.get_or_insert(Msg::NameTooShort);
                    }
                    InputViolation::NegativePrice => {
                        errors.price.get_or_insert(Msg::PriceNegative);
                    }
                    InputViolation::NegativeQuantity => {
                        errors.quantity.get_or_insert(Msg::QuantityNegative);
                    }
                }
            }
        }

        if errors.is_empty() { Ok(input) } else { Err(errors) }
    }
}

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub price: RwSignal<String>,
    pub quantity: RwSignal<String>,
    /// 最近一次提交的校验结果
    pub errors: RwSignal<ProductFormErrors>,
}

impl FormState {
    /// 创建新的表单状态，所有字段为空
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
            errors: RwSignal::new(ProductFormErrors::default()),
        }
    }

    /// 用已有商品回填
    pub fn fill(&self, product: &Product) {
        let draft = ProductDraft::from_product(product);
        self.name.set(draft.name);
        self.description.set(draft.description);
        self.price.set(draft.price);
        self.quantity.set(draft.quantity);
        self.errors.set(ProductFormErrors::default());
    }

    fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            price: self.price.get_untracked(),
            quantity: self.quantity.get_untracked(),
        }
    }

    /// 校验当前输入，并把字段错误写回表单
    pub fn submit(&self) -> Option<ProductInput> {
        match self.draft().validate() {
            Ok(input) => {
                self.errors.set(ProductFormErrors::default());
                Some(input)
            }
            Err(errors) => {
                self.errors.set(errors);
                None
            }
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
