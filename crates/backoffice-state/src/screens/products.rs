//! Product list and product forms.

use tracing::debug;

use backoffice_client::ProductService;
use backoffice_core::types::{PageRequest, SortField};
use backoffice_entity::{NewProduct, Product, ProductPatch};

use super::TableView;
use crate::feedback::{Feedback, Operation};

/// The product management screen.
#[derive(Debug, Clone)]
pub struct ProductTable {
    service: ProductService,
    feedback: Feedback,
    view: TableView<Product>,
    sort: SortField,
}

impl ProductTable {
    pub fn new(service: ProductService, feedback: Feedback, page_size: u64) -> Self {
        Self {
            service,
            feedback,
            view: TableView::new(page_size),
            sort: SortField::default(),
        }
    }

    pub fn view(&self) -> &TableView<Product> {
        &self.view
    }

    pub fn set_sort(&mut self, sort: SortField) {
        self.sort = sort;
    }

    pub async fn fetch(&mut self) -> bool {
        self.go_to(self.view.page().page).await
    }

    /// Load page `page` (1-based). On failure the previous rows stay.
    pub async fn go_to(&mut self, page: u64) -> bool {
        let request = PageRequest::new(page, self.view.page().page_size);
        match self.service.list(request, &self.sort).await {
            Ok(data) => {
                debug!(page, rows = data.content.len(), "Products loaded");
                self.view.replace(request, data);
                true
            }
            Err(e) => {
                self.feedback.report_failure(Operation::ListProducts, &e);
                false
            }
        }
    }

    /// Delete product `id` and drop its row.
    pub async fn delete(&mut self, id: &str) -> bool {
        match self.service.delete(id).await {
            Ok(()) => {
                let before = self.view.rows().len();
                self.view.rows_mut().retain(|p| p.id != id);
                if self.view.rows().len() < before {
                    self.view.forget_one();
                }
                self.feedback.report_success(Operation::DeleteProduct);
                true
            }
            Err(e) => {
                self.feedback.report_failure(Operation::DeleteProduct, &e);
                false
            }
        }
    }

    /// Load product `id` for the update form.
    ///
    /// `None` means the failure was reported and the caller returns to the list.
    pub async fn load(&self, id: &str) -> Option<Product> {
        self.service
            .get(id)
            .await
            .map_err(|e| self.feedback.report_failure(Operation::ViewProduct, &e))
            .ok()
    }

    pub async fn create(&self, form: &NewProduct) -> bool {
        match self.service.create(form).await {
            Ok(_) => {
                self.feedback.report_success(Operation::CreateProduct);
                true
            }
            Err(e) => {
                self.feedback.report_failure(Operation::CreateProduct, &e);
                false
            }
        }
    }

    pub async fn update(&self, id: &str, patch: &ProductPatch) -> bool {
        match self.service.update(id, patch).await {
            Ok(()) => {
                self.feedback.report_success(Operation::UpdateProduct);
                true
            }
            Err(e) => {
                self.feedback.report_failure(Operation::UpdateProduct, &e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;

    const PAGE: &str = r#"{"status":200,"data":{"content":[
        {"id":"p1","name":"Cà phê","description":"","price":45000,"quantity":3},
        {"id":"p2","name":"Trà","price":30000.5,"quantity":0}
    ],"totalElements":2}}"#;

    fn table(h: &Harness) -> ProductTable {
        ProductTable::new(h.products(), h.feedback(), 10)
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let h = Harness::new().with_token("t");
        h.backend.reply(200, PAGE).reply(200, r#"{"status":200}"#);
        let mut table = table(&h);
        table.fetch().await;

        assert!(table.delete("p1").await);
        let ids: Vec<_> = table.view().rows().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2"]);
        assert_eq!(table.view().total(), 1);
        assert_eq!(h.alert_descriptions(), vec!["Product deleted successfully"]);
    }

    #[tokio::test]
    async fn test_forbidden_delete_keeps_row() {
        let h = Harness::new().with_token("t");
        h.backend.reply(200, PAGE).reply(403, r#"{"message":"Forbidden"}"#);
        let mut table = table(&h);
        table.fetch().await;

        assert!(!table.delete("p1").await);
        assert_eq!(table.view().rows().len(), 2);
        assert_eq!(
            h.alert_descriptions(),
            vec!["Bạn không đủ quyền để xóa sản phẩm này."]
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_alerts_once() {
        let h = Harness::new().with_token("t");
        h.backend.reply(200, "not json");
        let mut table = table(&h);

        assert!(!table.fetch().await);
        assert!(table.view().rows().is_empty());
        assert_eq!(
            h.alert_descriptions(),
            vec!["Failed to fetch data from server"]
        );
    }

    #[tokio::test]
    async fn test_update_forbidden_message() {
        let h = Harness::new().with_token("t");
        h.backend.reply(200, r#"{"status":403}"#);
        let patch = ProductPatch {
            price: Some(10.0),
            ..Default::default()
        };

        assert!(!table(&h).update("p1", &patch).await);
        assert_eq!(h.alert_descriptions(), vec!["Bạn không đủ quyền"]);
    }

    #[tokio::test]
    async fn test_create_success() {
        let h = Harness::new().with_token("t");
        h.backend.reply(
            200,
            r#"{"status":201,"data":{"id":"p3","name":"Bánh","price":1,"quantity":1}}"#,
        );
        let form = NewProduct {
            name: "Bánh".into(),
            description: String::new(),
            price: 1.0,
            quantity: 1,
        };

        assert!(table(&h).create(&form).await);
        assert_eq!(h.alert_descriptions(), vec!["Tạo sản phẩm thành công!"]);
    }
}
