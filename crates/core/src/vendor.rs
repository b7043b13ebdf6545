//! Vendor (seller) accounts managed by administrators.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::filter::Searchable;
use crate::roles::Role;
use crate::types::DbId;

/// Cities a vendor can be assigned to.
pub const VENDOR_CITIES: &[&str] = &["La Paz", "Cochabamba", "Santa Cruz"];

pub const MSG_VENDOR_CREATE_FAILED: &str = "Error al registrar vendedor";
pub const MSG_VENDOR_DEACTIVATED: &str = "Vendedor desactivado del plantel.";
pub const MSG_VENDOR_DEACTIVATE_FAILED: &str = "Error al desactivar vendedor";

/// Field order used when reporting the first validation failure.
const FIELD_ORDER: &[&str] = &["nombre", "ci", "email", "tienda", "ciudad", "password"];

/// A staff account as listed by `/api/admin/vendedores`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: DbId,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub ci: String,
    #[serde(default)]
    pub tienda: String,
    #[serde(default)]
    pub ciudad: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub activo: bool,
    #[serde(default)]
    pub rol_nombre: String,
}

impl Vendor {
    pub fn status_label(&self) -> &'static str {
        if self.activo {
            "● TITULAR"
        } else {
            "○ EXPULSADO"
        }
    }
}

impl Searchable for Vendor {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(&self.nombre),
            Some(&self.ci),
            Some(&self.tienda),
            Some(&self.ciudad),
            Some(&self.email),
        ]
    }
}

/// Body of `POST /api/admin/vendedor/crear`.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewVendor {
    #[validate(length(min = 1, message = "El nombre completo es obligatorio"))]
    pub nombre: String,
    #[validate(length(min = 1, message = "El carnet de identidad es obligatorio"))]
    pub ci: String,
    #[validate(length(min = 1, message = "La tienda es obligatoria"))]
    pub tienda: String,
    #[validate(custom(function = "validate_city"))]
    pub ciudad: String,
    #[validate(email(message = "El email no es válido"))]
    pub email: String,
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: String,
    pub rol_nombre: Role,
}

fn validate_city(city: &str) -> Result<(), ValidationError> {
    if VENDOR_CITIES.contains(&city) {
        Ok(())
    } else {
        Err(ValidationError::new("ciudad").with_message(Cow::Borrowed("Seleccione una ciudad")))
    }
}

impl NewVendor {
    /// Run the form's required-field rules, reporting the first failure in
    /// form order.
    pub fn check(&self) -> Result<(), CoreError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let fields = errors.field_errors();
        let message = FIELD_ORDER
            .iter()
            .filter_map(|name| fields.get(*name))
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| MSG_VENDOR_CREATE_FAILED.to_string());
        Err(CoreError::Validation(message))
    }

    pub fn created_message(&self) -> String {
        format!("Vendedor {} registrado exitosamente", self.nombre)
    }
}
