//! Account record.

use serde::{Deserialize, Serialize};

use super::role::Role;
use super::status::AccountStatus;
use crate::de::string_or_number;

/// An administered account.
///
/// The "who am I" endpoint names the identifier `_id`; the listing names
/// it `id` and sends numbers. Both shapes deserialize into this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Backend identifier.
    #[serde(rename = "_id", alias = "id", deserialize_with = "string_or_number")]
    pub id: String,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Whether the account may sign in.
    pub status: AccountStatus,
    /// Backend role identifier.
    #[serde(deserialize_with = "string_or_number")]
    pub role_id: String,
}

impl Account {
    /// The role label for this account.
    pub fn role(&self) -> Role {
        Role::from_id(&self.role_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_information_payload() {
        let account: Account = serde_json::from_str(
            r#"{"_id":"a1","email":"a@x.vn","username":"admin","roleId":"1","status":"active"}"#,
        )
        .unwrap();
        assert_eq!(account.id, "a1");
        assert_eq!(account.role(), Role::Admin);
        assert!(account.status.is_active());
    }

    #[test]
    fn test_listing_payload_with_numbers() {
        let account: Account = serde_json::from_str(
            r#"{"id":7,"email":"b@x.vn","username":"bob","roleId":2,"status":"inactive"}"#,
        )
        .unwrap();
        assert_eq!(account.id, "7");
        assert_eq!(account.role_id, "2");
        assert_eq!(account.status, AccountStatus::Inactive);
    }
}
