use catalog_shared::protocol::{
    CreateProductMutation, DeleteProductMutation, LoginMutation, ProductByIdQuery, ProductsQuery,
    UpdateProductMutation,
};
use catalog_shared::{AuthPayload, Product, ProductId, ProductInput};

use crate::error::ApiError;
use crate::graphql::{GraphQlClient, GraphQlTransport};
use crate::session::SessionStore;
use crate::web::KeyValueStore;

/// 商品目录数据访问服务
#[derive(Clone)]
pub struct CatalogApi<T, S> {
    client: GraphQlClient<T, S>,
}

impl<T, S> CatalogApi<T, S>
where
    T: GraphQlTransport,
    S: KeyValueStore,
{
    pub fn new(client: GraphQlClient<T, S>) -> Self {
        Self { client }
    }

    pub fn session(&self) -> &SessionStore<S> {
        self.client.session()
    }

    /// 登录，返回 token 与用户信息
    pub async fn login(&self, username: &str, password: &str) -> Result<Option<AuthPayload>, ApiError> {
        self.client
            .execute(&LoginMutation {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await
    }

    /// 获取商品列表
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.client.execute(&ProductsQuery {}).await
    }

    pub async fn product_by_id(&self, id: ProductId) -> Result<Option<Product>, ApiError> {
        self.client.execute(&ProductByIdQuery { id }).await
    }

    /// 添加商品
    pub async fn create_product(&self, input: ProductInput) -> Result<Option<Product>, ApiError> {
        self.client.execute(&CreateProductMutation { input }).await
    }

    pub async fn update_product(
        &self,
        id: ProductId,
        input: ProductInput,
    ) -> Result<Option<Product>, ApiError> {
        self.client.execute(&UpdateProductMutation { id, input }).await
    }

    /// 删除商品；服务端没有返回数据时视为失败
    pub async fn delete_product(&self, id: ProductId) -> Result<bool, ApiError> {
        self.client.execute(&DeleteProductMutation { id }).await
    }
}

// =========================================================
// 测试工具: FakeCatalogServer
// =========================================================
