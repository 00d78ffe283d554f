//! Display rows for account and product tables.

use serde::Serialize;
use tabled::Tabled;

use backoffice_entity::{Account, Product};

/// Account display row; `no` is the running row number across pages.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct AccountRow {
    #[tabled(rename = "No.")]
    pub no: u64,
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Username")]
    pub username: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Role")]
    pub role: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl AccountRow {
    pub fn new(no: u64, account: &Account) -> Self {
        Self {
            no,
            id: account.id.clone(),
            username: account.username.clone(),
            email: account.email.clone(),
            role: account.role().label().to_string(),
            status: account.status.to_string(),
        }
    }

    /// Rows for `accounts` numbered from `first`.
    pub fn numbered(first: u64, accounts: &[Account]) -> Vec<Self> {
        (first..).zip(accounts).map(|(no, a)| Self::new(no, a)).collect()
    }
}

/// Product display row.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct ProductRow {
    #[tabled(rename = "No.")]
    pub no: u64,
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Price")]
    pub price: f64,
    #[tabled(rename = "Quantity")]
    pub quantity: i64,
}

impl ProductRow {
    pub fn new(no: u64, product: &Product) -> Self {
        Self {
            no,
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            quantity: product.quantity,
        }
    }

    pub fn numbered(first: u64, products: &[Product]) -> Vec<Self> {
        (first..).zip(products).map(|(no, p)| Self::new(no, p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::account;

    #[test]
    fn test_rows_number_from_page_offset() {
        let accounts = vec![account("1"), account("2")];
        let rows = AccountRow::numbered(11, &accounts);
        assert_eq!(rows[0].no, 11);
        assert_eq!(rows[1].no, 12);
        assert_eq!(rows[0].role, "Admin");
        assert_eq!(rows[0].status, "active");
    }
}
