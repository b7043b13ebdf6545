//! Authenticated session profile.

use serde::{Deserialize, Serialize};

use crate::roles::Role;

pub const MSG_LOGIN_FAILED: &str = "Error en el login";

/// Token and profile returned by `POST /api/auth/login`.
///
/// Persisted as-is in the session store and read back at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthData {
    pub token: String,
    pub email: String,
    pub nombre: String,
    pub rol: Role,
}

impl AuthData {
    pub fn is_admin(&self) -> bool {
        self.rol == Role::Admin
    }

    pub fn is_vendor(&self) -> bool {
        self.rol == Role::Vendor
    }
}

/// Login request body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_data_reads_login_payload() {
        let data: AuthData = serde_json::from_str(
            r#"{"token":"abc","email":"ana@tienda.bo","nombre":"Ana","rol":"VENDEDOR"}"#,
        )
        .unwrap();
        assert!(data.is_vendor());
        assert!(!data.is_admin());
        assert_eq!(data.nombre, "Ana");
    }

    #[test]
    fn login_request_serializes_credentials() {
        let body = serde_json::to_value(LoginRequest {
            email: "a@b.c",
            password: "secret",
        })
        .unwrap();
        assert_eq!(body["email"], "a@b.c");
        assert_eq!(body["password"], "secret");
    }
}
