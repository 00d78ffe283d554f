//! Account list and account forms.

use tracing::debug;

use backoffice_client::AccountService;
use backoffice_core::types::{PageRequest, SortField};
use backoffice_entity::{Account, AccountPatch, NewAccount};

use super::TableView;
use crate::feedback::{Feedback, Operation};

/// The account management screen.
#[derive(Debug, Clone)]
pub struct AccountTable {
    service: AccountService,
    feedback: Feedback,
    view: TableView<Account>,
    sort: SortField,
}

impl AccountTable {
    pub fn new(service: AccountService, feedback: Feedback, page_size: u64) -> Self {
        Self {
            service,
            feedback,
            view: TableView::new(page_size),
            sort: SortField::default(),
        }
    }

    pub fn view(&self) -> &TableView<Account> {
        &self.view
    }

    pub fn sort(&self) -> &SortField {
        &self.sort
    }

    /// Change the ordering; takes effect on the next fetch.
    pub fn set_sort(&mut self, sort: SortField) {
        self.sort = sort;
    }

    /// Reload the current page.
    pub async fn fetch(&mut self) -> bool {
        self.go_to(self.view.page().page).await
    }

    /// Load page `page` (1-based). On failure the previous rows stay.
    pub async fn go_to(&mut self, page: u64) -> bool {
        let request = PageRequest::new(page, self.view.page().page_size);
        match self.service.list(request, &self.sort).await {
            Ok(data) => {
                debug!(page, rows = data.content.len(), "Accounts loaded");
                self.view.replace(request, data);
                true
            }
            Err(e) => {
                self.feedback.report_failure(Operation::ListAccounts, &e);
                false
            }
        }
    }

    /// Flip the status of account `id` and update its row in place.
    pub async fn toggle_status(&mut self, id: &str) -> bool {
        let Some(row) = self.view.rows().iter().position(|a| a.id == id) else {
            debug!(account_id = %id, "Status toggle for account not on this page");
            return false;
        };
        let next = self.view.rows()[row].status.toggled();

        match self.service.set_status(id, next).await {
            Ok(()) => {
                self.view.rows_mut()[row].status = next;
                self.feedback.report_success(Operation::UpdateAccountStatus);
                true
            }
            Err(e) => {
                self.feedback.report_failure(Operation::UpdateAccountStatus, &e);
                false
            }
        }
    }

    /// Load account `id` for the update form.
    ///
    /// `None` means the failure was reported and the caller returns to the list.
    pub async fn load(&self, id: &str) -> Option<Account> {
        self.service
            .get(id)
            .await
            .map_err(|e| self.feedback.report_failure(Operation::ViewAccount, &e))
            .ok()
    }

    /// Submit the create form.
    pub async fn create(&self, form: &NewAccount) -> bool {
        match self.service.create(form).await {
            Ok(_) => {
                self.feedback.report_success(Operation::CreateAccount);
                true
            }
            Err(e) => {
                self.feedback.report_failure(Operation::CreateAccount, &e);
                false
            }
        }
    }

    /// Submit the update form.
    pub async fn update(&self, id: &str, patch: &AccountPatch) -> bool {
        match self.service.update(id, patch).await {
            Ok(()) => {
                self.feedback.report_success(Operation::UpdateAccount);
                true
            }
            Err(e) => {
                self.feedback.report_failure(Operation::UpdateAccount, &e);
                false
            }
        }
    }
}
