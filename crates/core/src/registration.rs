//! Public registration form: customer data, three attachments and consent.
//!
//! Everything here runs before the multipart request is built. A form that
//! fails [`prepare`] must not cause any network traffic.

use serde::Deserialize;

use crate::error::CoreError;
use crate::roles::Role;
use crate::session::AuthData;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_LOGIN_REQUIRED: &str = "⚠️ Debes iniciar sesión como vendedor para registrar ventas. Por favor, recarga la página e inicia sesión.";
pub const MSG_ADMIN_CANNOT_REGISTER: &str = "Los administradores no pueden registrar ventas. Solo los vendedores están autorizados para registrar clientes.";
pub const MSG_VENDOR_ONLY: &str = "Solo los vendedores pueden registrar ventas. Tu rol actual no tiene permiso para esta acción.";
pub const MSG_MISSING_DOCUMENTS: &str = "Árbitro: Falta documentación obligatoria (CI y Factura).";
pub const MSG_TERMS_REQUIRED: &str = "Debes aceptar el reglamento del torneo.";
pub const MSG_REGISTRATION_FAILED: &str = "Error en el registro";
pub const MSG_REGISTRATION_OK: &str = "Registro exitoso";

// ---------------------------------------------------------------------------
// Multipart part names
// ---------------------------------------------------------------------------

pub const PART_ID_FRONT: &str = "ciAnverso";
pub const PART_ID_BACK: &str = "ciReverso";
pub const PART_SALES_NOTE: &str = "notaVenta";

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Text fields and consent as entered on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub ci: String,
    pub email: String,
    pub phone: String,
    pub document_type: String,
    pub issue_place: String,
    /// Serial code typed in or captured by the scanner.
    pub code: String,
    pub terms: bool,
}

/// The three binary attachments. `F` is whatever handle the caller uses
/// for a selected file.
#[derive(Debug, Clone)]
pub struct Attachments<F> {
    pub id_front: Option<F>,
    pub id_back: Option<F>,
    pub invoice: Option<F>,
}

impl<F> Default for Attachments<F> {
    fn default() -> Self {
        Self {
            id_front: None,
            id_back: None,
            invoice: None,
        }
    }
}

/// All three attachments, guaranteed present.
#[derive(Debug, Clone)]
pub struct ReadyAttachments<F> {
    pub id_front: F,
    pub id_back: F,
    pub invoice: F,
}

impl<F> ReadyAttachments<F> {
    /// `(part name, file)` pairs in submission order.
    pub fn into_parts(self) -> [(&'static str, F); 3] {
        [
            (PART_ID_FRONT, self.id_front),
            (PART_ID_BACK, self.id_back),
            (PART_SALES_NOTE, self.invoice),
        ]
    }
}

/// Text parts of the multipart body, already normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationFields {
    pub nombre: String,
    pub ci: String,
    pub email: String,
    pub telefono: String,
    pub tipo_documento_identidad: String,
    pub lugar_emision: String,
    pub serial_ingresado: String,
    pub vendedor_email: String,
}

impl RegistrationFields {
    /// `(part name, value)` pairs in submission order.
    pub fn pairs(&self) -> [(&'static str, &str); 8] {
        [
            ("nombre", self.nombre.as_str()),
            ("ci", self.ci.as_str()),
            ("email", self.email.as_str()),
            ("telefono", self.telefono.as_str()),
            ("tipoDocumentoIdentidad", self.tipo_documento_identidad.as_str()),
            ("lugarEmision", self.lugar_emision.as_str()),
            ("serialIngresado", self.serial_ingresado.as_str()),
            ("vendedorEmail", self.vendedor_email.as_str()),
        ]
    }
}

/// Normalise a typed or scanned serial code.
pub fn normalize_serial(code: &str) -> String {
    code.to_uppercase().trim().to_string()
}

/// Check the session, attachments and consent, then build the multipart
/// fields. Checks run in a fixed order and the first failure wins.
/// The session checks that precede every other registration rule: a
/// logged-in profile with an email, holding the seller role.
pub fn ensure_seller(session: Option<&AuthData>) -> Result<&AuthData, CoreError> {
    let seller = match session {
        Some(user) if !user.email.is_empty() => user,
        _ => return Err(CoreError::Unauthorized(MSG_LOGIN_REQUIRED.to_string())),
    };
    match seller.rol {
        Role::Vendor => Ok(seller),
        Role::Admin => Err(CoreError::Forbidden(MSG_ADMIN_CANNOT_REGISTER.to_string())),
        Role::Other(_) => Err(CoreError::Forbidden(MSG_VENDOR_ONLY.to_string())),
    }
}

pub fn prepare<F>(
    form: &RegistrationForm,
    attachments: Attachments<F>,
    session: Option<&AuthData>,
) -> Result<(RegistrationFields, ReadyAttachments<F>), CoreError> {
    let seller = ensure_seller(session)?;

    let (Some(id_front), Some(id_back), Some(invoice)) =
        (attachments.id_front, attachments.id_back, attachments.invoice)
    else {
        return Err(CoreError::Validation(MSG_MISSING_DOCUMENTS.to_string()));
    };

    if !form.terms {
        return Err(CoreError::Validation(MSG_TERMS_REQUIRED.to_string()));
    }

    let fields = RegistrationFields {
        nombre: format!("{} {}", form.first_name, form.last_name),
        ci: form.ci.clone(),
        email: form.email.clone(),
        telefono: form.phone.clone(),
        tipo_documento_identidad: form.document_type.clone(),
        lugar_emision: form.issue_place.clone(),
        serial_ingresado: normalize_serial(&form.code),
        vendedor_email: seller.email.clone(),
    };

    Ok((
        fields,
        ReadyAttachments {
            id_front,
            id_back,
            invoice,
        },
    ))
}

// ---------------------------------------------------------------------------
// Receipt
// ---------------------------------------------------------------------------

/// `data` of a successful `POST /api/registro`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationReceipt {
    #[serde(default)]
    pub codigos_cupones: Vec<String>,
    #[serde(default, rename = "whatsappEnviado")]
    pub whatsapp_enviado: Option<bool>,
    #[serde(default, rename = "errorWhatsapp")]
    pub error_whatsapp: Option<String>,
}

impl RegistrationReceipt {
    /// Warning shown when the coupon codes could not be sent by WhatsApp.
    pub fn whatsapp_warning(&self) -> Option<String> {
        if self.whatsapp_enviado.unwrap_or(false) {
            return None;
        }
        self.error_whatsapp
            .as_deref()
            .filter(|e| !e.is_empty())
            .map(|e| format!("Nota: No se pudo enviar el mensaje por WhatsApp. {e}"))
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Lifecycle of one registration form instance.
///
/// `Editing -> Submitting -> {Success, Failure}`, `Failure -> Editing`.
/// `Success` is terminal: a new form is needed to register again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegistrationState {
    #[default]
    Editing,
    Submitting,
    Success {
        coupons: Vec<String>,
        message: String,
    },
    Failure {
        message: String,
    },
}

impl RegistrationState {
    pub fn begin_submit(&mut self) -> Result<(), CoreError> {
        match self {
            RegistrationState::Editing => {
                *self = RegistrationState::Submitting;
                Ok(())
            }
            other => Err(invalid_transition(other, "submit")),
        }
    }

    pub fn succeed(&mut self, coupons: Vec<String>, message: String) -> Result<(), CoreError> {
        match self {
            RegistrationState::Submitting => {
                *self = RegistrationState::Success { coupons, message };
                Ok(())
            }
            other => Err(invalid_transition(other, "succeed")),
        }
    }

    pub fn fail(&mut self, message: String) -> Result<(), CoreError> {
        match self {
            RegistrationState::Submitting => {
                *self = RegistrationState::Failure { message };
                Ok(())
            }
            other => Err(invalid_transition(other, "fail")),
        }
    }

    /// Dismiss a failure dialog and return to editing.
    pub fn acknowledge(&mut self) -> Result<(), CoreError> {
        match self {
            RegistrationState::Failure { .. } => {
                *self = RegistrationState::Editing;
                Ok(())
            }
            other => Err(invalid_transition(other, "acknowledge")),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RegistrationState::Success { .. })
    }

    fn name(&self) -> &'static str {
        match self {
            RegistrationState::Editing => "editing",
            RegistrationState::Submitting => "submitting",
            RegistrationState::Success { .. } => "success",
            RegistrationState::Failure { .. } => "failure",
        }
    }
}

fn invalid_transition(state: &RegistrationState, action: &str) -> CoreError {
    CoreError::Validation(format!(
        "cannot {action} a registration form in state '{}'",
        state.name()
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
