//! GraphQL 操作定义
//!
//! 每个操作结构体本身就是它的 `variables`，通过 [`GraphQlOperation`]
//! 关联查询文档、响应数据结构以及响应的归一化规则。

use crate::{AuthPayload, Product, ProductId, ProductInput};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// A trait that binds an operation's variables to its document and response shape.
pub trait GraphQlOperation: Serialize {
    /// `data` 字段的反序列化类型
    type Data: DeserializeOwned;
    /// 归一化之后交给调用方的值
    type Output;
    /// operationName
    const NAME: &'static str;
    /// 查询文档
    const DOCUMENT: &'static str;

    /// 将（可能缺失的）`data` 归一化为普通值
    fn output(data: Option<Self::Data>) -> Self::Output;
}

// =========================================================
// Login
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginMutation {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub login: Option<AuthPayload>,
}

impl GraphQlOperation for LoginMutation {
    type Data = LoginData;
    type Output = Option<AuthPayload>;
    const NAME: &'static str = "Login";
    const DOCUMENT: &'static str = r#"mutation Login($username: String!, $password: String!) {
  login(username: $username, password: $password) {
    token
    user {
      id
      username
      role
    }
  }
}"#;

    fn output(data: Option<Self::Data>) -> Self::Output {
        data.and_then(|d| d.login)
    }
}

// =========================================================
// Products
// =========================================================

/// List all products
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductsQuery {}

#[derive(Debug, Deserialize)]
pub struct ProductsData {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

impl GraphQlOperation for ProductsQuery {
    type Data = ProductsData;
    type Output = Vec<Product>;
    const NAME: &'static str = "Products";
    const DOCUMENT: &'static str = r#"query Products {
  products {
    id
    name
    description
    price
    quantity
    createdAt
  }
}"#;

    fn output(data: Option<Self::Data>) -> Self::Output {
        data.and_then(|d| d.products).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductByIdQuery {
    pub id: ProductId,
}

#[derive(Debug, Deserialize)]
pub struct ProductByIdData {
    #[serde(rename = "productById", default)]
    pub product_by_id: Option<Product>,
}

impl GraphQlOperation for ProductByIdQuery {
    type Data = ProductByIdData;
    type Output = Option<Product>;
    const NAME: &'static str = "ProductById";
    const DOCUMENT: &'static str = r#"query ProductById($id: Int!) {
  productById(id: $id) {
    id
    name
    description
    price
    quantity
  }
}"#;

    fn output(data: Option<Self::Data>) -> Self::Output {
        data.and_then(|d| d.product_by_id)
    }
}

/// `createProduct` / `updateProduct` 共用的 payload 包装
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub product: Option<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductMutation {
    pub input: ProductInput,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductData {
    #[serde(rename = "createProduct", default)]
    pub create_product: Option<ProductPayload>,
}

impl GraphQlOperation for CreateProductMutation {
    type Data = CreateProductData;
    type Output = Option<Product>;
    const NAME: &'static str = "CreateProduct";
    const DOCUMENT: &'static str = r#"mutation CreateProduct($input: ProductInput!) {
  createProduct(input: $input) {
    product {
      id
      name
      description
      price
      quantity
      createdAt
    }
  }
}"#;

    fn output(data: Option<Self::Data>) -> Self::Output {
        data.and_then(|d| d.create_product).and_then(|p| p.product)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductMutation {
    pub id: ProductId,
    pub input: ProductInput,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductData {
    #[serde(rename = "updateProduct", default)]
    pub update_product: Option<ProductPayload>,
}

impl GraphQlOperation for UpdateProductMutation {
    type Data = UpdateProductData;
    type Output = Option<Product>;
    const NAME: &'static str = "UpdateProduct";
    const DOCUMENT: &'static str = r#"mutation UpdateProduct($id: Int!, $input: ProductInput!) {
  updateProduct(id: $id, input: $input) {
    product {
      id
      name
      description
      price
      quantity
    }
  }
}"#;

    fn output(data: Option<Self::Data>) -> Self::Output {
        data.and_then(|d| d.update_product).and_then(|p| p.product)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteProductMutation {
    pub id: ProductId,
}

#[derive(Debug, Deserialize)]
pub struct DeleteProductData {
    #[serde(rename = "deleteProduct", default)]
    pub delete_product: Option<bool>,
}

impl GraphQlOperation for DeleteProductMutation {
    type Data = DeleteProductData;
    type Output = bool;
    const NAME: &'static str = "DeleteProduct";
    const DOCUMENT: &'static str = r#"mutation DeleteProduct($id: Int!) {
  deleteProduct(id: $id)
}"#;

    fn output(data: Option<Self::Data>) -> Self::Output {
        data.and_then(|d| d.delete_product).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse<O: GraphQlOperation>(data: serde_json::Value) -> O::Output {
        O::output(Some(serde_json::from_value(data).unwrap()))
    }

    #[test]
    fn products_default_to_empty_list() {
        assert!(ProductsQuery::output(None).is_empty());
        assert!(parse::<ProductsQuery>(json!({ "products": null })).is_empty());
    }

    #[test]
    fn products_are_passed_through() {
        let list = parse::<ProductsQuery>(json!({
            "products": [
                { "id": 1, "name": "P1", "description": null, "price": 10, "quantity": 2, "createdAt": null }
            ]
        }));
        assert_eq!(
            list,
            vec![Product {
                id: 1,
                name: "P1".into(),
                description: None,
                price: 10.0,
                quantity: 2,
                created_at: None,
            }]
        );
    }

    #[test]
    fn create_unwraps_nested_product() {
        let created = parse::<CreateProductMutation>(json!({
            "createProduct": { "product": {
                "id": 2, "name": "New", "description": "Desc", "price": 20, "quantity": 5, "createdAt": null
            } }
        }));
        assert_eq!(created.map(|p| (p.id, p.name)), Some((2, "New".to_string())));
        assert_eq!(parse::<CreateProductMutation>(json!({ "createProduct": null })), None);
    }

    #[test]
    fn update_missing_payload_is_none() {
        assert_eq!(UpdateProductMutation::output(None), None);
        assert_eq!(
            parse::<UpdateProductMutation>(json!({ "updateProduct": { "product": null } })),
            None
        );
    }

    #[test]
    fn delete_defaults_to_false() {
        assert!(!DeleteProductMutation::output(None));
        assert!(!parse::<DeleteProductMutation>(json!({})));
        assert!(parse::<DeleteProductMutation>(json!({ "deleteProduct": true })));
    }

    #[test]
    fn variables_match_document_names() {
        let update = UpdateProductMutation {
            id: 3,
            input: ProductInput {
                name: "Updated".into(),
                description: Some("D".into()),
                price: 30.0,
                quantity: 1,
            },
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({
                "id": 3,
                "input": { "name": "Updated", "description": "D", "price": 30.0, "quantity": 1 }
            })
        );
        assert_eq!(serde_json::to_value(ProductsQuery {}).unwrap(), json!({}));
    }

    #[test]
    fn documents_declare_their_operation_name() {
        for (name, doc) in [
            (LoginMutation::NAME, LoginMutation::DOCUMENT),
            (ProductsQuery::NAME, ProductsQuery::DOCUMENT),
            (ProductByIdQuery::NAME, ProductByIdQuery::DOCUMENT),
            (CreateProductMutation::NAME, CreateProductMutation::DOCUMENT),
            (UpdateProductMutation::NAME, UpdateProductMutation::DOCUMENT),
            (DeleteProductMutation::NAME, DeleteProductMutation::DOCUMENT),
        ] {
            assert!(doc.contains(name), "{name} missing from its document");
        }
    }
}
