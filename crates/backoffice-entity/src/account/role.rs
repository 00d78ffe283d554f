//! Role labels shown in the account table.

use std::fmt;

/// Known backend roles, keyed by `roleId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// `roleId` 1.
    Admin,
    /// `roleId` 2.
    User,
    /// `roleId` 3.
    Editor,
    /// `roleId` 4.
    Manager,
    /// Any other id.
    Unknown,
}

impl Role {
    /// Map a backend role id to its label.
    pub fn from_id(role_id: &str) -> Self {
        match role_id.trim() {
            "1" => Self::Admin,
            "2" => Self::User,
            "3" => Self::Editor,
            "4" => Self::Manager,
            _ => Self::Unknown,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
            Self::Editor => "Editor",
            Self::Manager => "Manager",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_ids() {
        assert_eq!(Role::from_id("1"), Role::Admin);
        assert_eq!(Role::from_id("4").label(), "Manager");
        assert_eq!(Role::from_id("9"), Role::Unknown);
        assert_eq!(Role::from_id("abc"), Role::Unknown);
    }
}
