//! Who is signed in, and the gate that decides it.

pub mod gate;

pub use gate::{LOGIN_FAILED_DESCRIPTION, LOGIN_FAILED_MESSAGE, SessionGate, SessionTrigger};

use backoffice_entity::Account;

/// The published session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// No validated account. The state before the first publish.
    #[default]
    Anonymous,
    /// The account the stored token belongs to.
    Authenticated(Account),
}

impl Session {
    pub fn account(&self) -> Option<&Account> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(account) => Some(account),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

impl From<Option<Account>> for Session {
    fn from(account: Option<Account>) -> Self {
        account.map_or(Self::Anonymous, Self::Authenticated)
    }
}
