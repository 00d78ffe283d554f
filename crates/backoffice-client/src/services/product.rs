//! Product endpoints (`product/...`).

use tracing::info;

use backoffice_core::AppResult;
use backoffice_core::types::{Page, PageRequest, SortField};
use backoffice_entity::{NewProduct, Product, ProductPatch, validate_form};

use crate::http::ApiRequest;
use crate::http::interpret::{interpret, interpret_data};

use super::ApiClient;

/// Product catalogue administration.
#[derive(Debug, Clone)]
pub struct ProductService {
    client: ApiClient,
}

impl ProductService {
    /// Create the service.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// One page of products.
    pub async fn list(&self, page: PageRequest, sort: &SortField) -> AppResult<Page<Product>> {
        let request = ApiRequest::get("product")
            .query("page", page.backend_page())
            .query("size", page.page_size)
            .query("sortBy", &sort.field)
            .query("sortDirection", sort.direction);
        let response = self.client.send_authorized(request).await?;
        interpret_data(&response, "list products")
    }

    /// A single product.
    pub async fn get(&self, id: &str) -> AppResult<Product> {
        let response = self
            .client
            .send_authorized(ApiRequest::get(format!("product/{id}")))
            .await?;
        interpret_data(&response, "fetch product")
    }

    /// Create a product. Returns the created record when the backend echoes it.
    pub async fn create(&self, form: &NewProduct) -> AppResult<Option<Product>> {
        validate_form(form)?;
        let request = ApiRequest::post("product")
            .json(serde_json::to_value(form)?);
        let response = self.client.send_authorized(request).await?;
        let created = interpret(&response, "create product")?
            .and_then(|data| serde_json::from_value(data).ok());
        info!(name = %form.name, "Product created");
        Ok(created)
    }

    /// Patch a product.
    pub async fn update(&self, id: &str, patch: &ProductPatch) -> AppResult<()> {
        validate_form(patch)?;
        let response = self
            .client
            .send_authorized(
                ApiRequest::patch(format!("product/{id}")).json(serde_json::to_value(patch)?),
            )
            .await?;
        interpret(&response, "update product")?;
        info!(product_id = %id, "Product updated");
        Ok(())
    }

    /// Delete a product.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let response = self
            .client
            .send_authorized(ApiRequest::delete(format!("product/{id}")))
            .await?;
        interpret(&response, "delete product")?;
        info!(product_id = %id, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::http::Method;
    use crate::testing::FakeBackend;
    use crate::token::MemoryTokenStore;

    fn service(transport: Arc<FakeBackend>) -> ProductService {
        ProductService::new(ApiClient::new(transport, Arc::new(MemoryTokenStore::new())))
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_body() {
        let transport = FakeBackend::shared();
        transport.reply(204, "");
        service(transport.clone()).delete("9").await.unwrap();

        let sent = &transport.sent()[0];
        assert_eq!(sent.method, Method::Delete);
        assert_eq!(sent.path, "product/9");
        assert!(sent.token.is_none());
    }

    #[tokio::test]
    async fn test_update_forbidden() {
        let transport = FakeBackend::shared();
        transport.reply(403, "");
        let patch = ProductPatch {
            quantity: Some(3),
            ..Default::default()
        };
        let err = service(transport).update("9", &patch).await.unwrap_err();
        assert!(err.is_forbidden());
    }

    #[tokio::test]
    async fn test_get_parses_product() {
        let transport = FakeBackend::shared();
        transport.reply(
            200,
            r#"{"status":200,"data":{"id":9,"name":"Bút","description":"","price":5000,"quantity":3}}"#,
        );
        let product = service(transport).get("9").await.unwrap();
        assert_eq!(product.name, "Bút");
    }
}
