//! Account roles issued by the campaign API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire name of the administrator role.
pub const ROLE_ADMIN: &str = "ADMIN";

/// Wire name of the seller role.
pub const ROLE_VENDOR: &str = "VENDEDOR";

/// Role attached to a session or a vendor account.
///
/// Unknown role names are preserved in [`Role::Other`] so that they can be
/// displayed and rejected explicitly instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    #[default]
    Vendor,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Vendor => ROLE_VENDOR,
            Role::Other(name) => name,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            ROLE_ADMIN => Role::Admin,
            ROLE_VENDOR => Role::Vendor,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
