//! User-facing outcome messages for every management operation.

use tracing::warn;

use backoffice_core::AppError;
use backoffice_core::error::ErrorKind;

use crate::alert::AlertId;
use crate::store::Store;

const ERROR_TITLE: &str = "Lỗi";
const SUCCESS_TITLE: &str = "Thành công";
const RETRY_FALLBACK: &str = "Có lỗi xảy ra, vui lòng thử lại.";

/// A management action whose outcome is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListAccounts,
    ViewAccount,
    CreateAccount,
    UpdateAccount,
    UpdateAccountStatus,
    ListProducts,
    ViewProduct,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
}

impl Operation {
    /// Shown when the backend refuses for lack of permission.
    pub fn forbidden_message(&self) -> &'static str {
        match self {
            Self::ListAccounts => "Bạn không đủ quyền để xem danh sách tài khoản.",
            Self::ViewAccount => "Bạn không đủ quyền để xem chi tiết tài khoản này.",
            Self::CreateAccount => "Bạn không đủ quyền để tạo tài khoản.",
            Self::UpdateAccount => "Bạn không đủ quyền để cập nhật tài khoản này.",
            Self::UpdateAccountStatus => "Bạn không đủ quyền để thay đổi trạng thái tài khoản này.",
            Self::ListProducts => "Bạn không đủ quyền để xem danh sách sản phẩm.",
            Self::ViewProduct => "Bạn không đủ quyền để xem chi tiết sản phẩm này.",
            Self::CreateProduct => "Bạn không đủ quyền để tạo sản phẩm.",
            Self::UpdateProduct => "Bạn không đủ quyền",
            Self::DeleteProduct => "Bạn không đủ quyền để xóa sản phẩm này.",
        }
    }

    /// Shown when the request never got a usable answer.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::ListAccounts | Self::ListProducts => "Failed to fetch data from server",
            Self::ViewAccount => "Failed to load account details",
            Self::UpdateAccountStatus => "Failed to update status",
            Self::ViewProduct => "Có lỗi xảy ra khi lấy thông tin sản phẩm",
            Self::DeleteProduct => "Failed to delete product",
            Self::CreateAccount
            | Self::UpdateAccount
            | Self::CreateProduct
            | Self::UpdateProduct => RETRY_FALLBACK,
        }
    }

    /// Shown after the operation succeeded, if it warrants a message.
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            Self::CreateAccount => Some("Tạo mới tài khoản thành công!"),
            Self::UpdateAccount => Some("Cập nhật tài khoản thành công!"),
            Self::UpdateAccountStatus => Some("Status updated successfully"),
            Self::CreateProduct => Some("Tạo sản phẩm thành công!"),
            Self::UpdateProduct => Some("Cập nhật sản phẩm thành công!"),
            Self::DeleteProduct => Some("Product deleted successfully"),
            Self::ListAccounts | Self::ViewAccount | Self::ListProducts | Self::ViewProduct => None,
        }
    }

    /// The text to show for `err`.
    pub fn describe(&self, err: &AppError) -> String {
        match err.kind {
            ErrorKind::Authorization => self.forbidden_message().to_string(),
            ErrorKind::Transport
            | ErrorKind::Serialization
            | ErrorKind::Internal
            | ErrorKind::Storage
            | ErrorKind::Configuration => self.fallback_message().to_string(),
            _ if err.message.is_empty() => self.fallback_message().to_string(),
            _ => err.message.clone(),
        }
    }
}

/// Reports operation outcomes into the alert queue.
#[derive(Debug, Clone)]
pub struct Feedback {
    store: Store,
    duration: f64,
}

impl Feedback {
    pub fn new(store: Store, duration_secs: f64) -> Self {
        Self {
            store,
            duration: duration_secs,
        }
    }

    /// Enqueue exactly one alert describing `err`.
    pub fn report_failure(&self, operation: Operation, err: &AppError) -> AlertId {
        warn!(?operation, error = %err, "Operation failed");
        self.store
            .add_alert(ERROR_TITLE, operation.describe(err), self.duration)
    }

    /// Enqueue the success alert for `operation`, if it has one.
    pub fn report_success(&self, operation: Operation) -> Option<AlertId> {
        operation
            .success_message()
            .map(|text| self.store.add_alert(SUCCESS_TITLE, text, self.duration))
    }
}
