//! Customer registration: client-side gatekeeping and the multipart body.

mod common;

use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::extract::Multipart;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use promo_client::{ApiError, UploadFile};
use promo_core::registration::{
    Attachments, RegistrationForm, MSG_ADMIN_CANNOT_REGISTER, MSG_LOGIN_REQUIRED,
    MSG_MISSING_DOCUMENTS, MSG_TERMS_REQUIRED,
};
use promo_core::roles::Role;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `(part name, text value or file name)` in arrival order.
type Parts = Arc<Mutex<Vec<(String, String)>>>;

fn form() -> RegistrationForm {
    RegistrationForm {
        first_name: "Ana".to_string(),
        last_name: "Pérez".to_string(),
        ci: "4455667".to_string(),
        email: "ana@correo.bo".to_string(),
        phone: "70000001".to_string(),
        document_type: "CI".to_string(),
        issue_place: "LP".to_string(),
        code: "  sky-123 ".to_string(),
        terms: true,
    }
}

fn attachments() -> Attachments<UploadFile> {
    Attachments {
        id_front: Some(UploadFile::from_bytes("anverso.jpg", b"front".to_vec())),
        id_back: Some(UploadFile::from_bytes("reverso.jpg", b"back".to_vec())),
        invoice: Some(UploadFile::from_bytes("nota.pdf", b"note".to_vec())),
    }
}

/// Route that records the multipart body and the Authorization header,
/// then answers with `status` and `reply`.
fn recording_route(parts: Parts, auth: Arc<Mutex<Option<String>>>, status: StatusCode, reply: Value) -> Router {
    Router::new().route(
        "/api/registro",
        post(move |headers: HeaderMap, mut multipart: Multipart| {
            let parts = parts.clone();
            let auth = auth.clone();
            let reply = reply.clone();
            async move {
                *auth.lock().unwrap() = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                while let Some(field) = multipart.next_field().await.unwrap() {
                    let name = field.name().unwrap_or_default().to_string();
                    let file_name = field.file_name().map(str::to_string);
                    let bytes = field.bytes().await.unwrap();
                    let value = file_name.unwrap_or_else(|| String::from_utf8(bytes.to_vec()).unwrap());
                    parts.lock().unwrap().push((name, value));
                }
                (status, Json(reply))
            }
        }),
    )
}

fn ok_reply() -> Value {
    json!({
        "error": false,
        "message": "¡Registro completado!",
        "data": {
            "codigos_cupones": ["CUP-0001", "CUP-0002"],
            "whatsappEnviado": false,
            "errorWhatsapp": "Número no válido"
        }
    })
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn complete_form_sends_one_multipart_post() {
    let parts: Parts = Arc::default();
    let auth = Arc::new(Mutex::new(None));
    let fake = common::serve(recording_route(parts.clone(), auth.clone(), StatusCode::OK, ok_reply())).await;
    let api = common::client(&fake.base_url, Some(&common::session(Role::Vendor)));

    let reply = api.register_client(&form(), attachments()).await.unwrap();

    assert_eq!(fake.hits(), 1);
    assert_eq!(auth.lock().unwrap().as_deref(), Some("Bearer tok-123"));

    let parts = parts.lock().unwrap().clone();
    let expected: Vec<(String, String)> = [
        ("nombre", "Ana Pérez"),
        ("ci", "4455667"),
        ("email", "ana@correo.bo"),
        ("telefono", "70000001"),
        ("tipoDocumentoIdentidad", "CI"),
        ("lugarEmision", "LP"),
        ("serialIngresado", "SKY-123"),
        ("vendedorEmail", "vendedor@tienda.bo"),
        ("ciAnverso", "anverso.jpg"),
        ("ciReverso", "reverso.jpg"),
        ("notaVenta", "nota.pdf"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(parts, expected);

    assert_eq!(reply.data.codigos_cupones, vec!["CUP-0001", "CUP-0002"]);
    assert_eq!(reply.message.as_deref(), Some("¡Registro completado!"));
    assert_eq!(
        reply.data.whatsapp_warning().as_deref(),
        Some("Nota: No se pudo enviar el mensaje por WhatsApp. Número no válido")
    );
}

// ---------------------------------------------------------------------------
// Client-side rejection: no request leaves the process
// ---------------------------------------------------------------------------

async fn rejected(
    user: Option<Role>,
    form: RegistrationForm,
    attachments: Attachments<UploadFile>,
) -> (ApiError, usize) {
    let parts: Parts = Arc::default();
    let fake = common::serve(recording_route(parts, Arc::default(), StatusCode::OK, ok_reply())).await;
    let session = user.map(common::session);
    let api = common::client(&fake.base_url, session.as_ref());
    let err = api.register_client(&form, attachments).await.unwrap_err();
    (err, fake.hits())
}

#[tokio::test]
async fn missing_invoice_makes_no_request() {
    let mut files = attachments();
    files.invoice = None;
    let (err, hits) = rejected(Some(Role::Vendor), form(), files).await;
    assert_eq!(hits, 0);
    assert_matches!(err, ApiError::Validation(ref m) if m == MSG_MISSING_DOCUMENTS);
}

#[tokio::test]
async fn missing_consent_makes_no_request() {
    let unchecked = RegistrationForm {
        terms: false,
        ..form()
    };
    let (err, hits) = rejected(Some(Role::Vendor), unchecked, attachments()).await;
    assert_eq!(hits, 0);
    assert_matches!(err, ApiError::Validation(ref m) if m == MSG_TERMS_REQUIRED);
}

#[tokio::test]
async fn admin_cannot_register() {
    let (err, hits) = rejected(Some(Role::Admin), form(), attachments()).await;
    assert_eq!(hits, 0);
    assert_eq!(err.user_message(), MSG_ADMIN_CANNOT_REGISTER);
}

#[tokio::test]
async fn anonymous_cannot_register() {
    let (err, hits) = rejected(None, form(), Attachments::default()).await;
    assert_eq!(hits, 0);
    assert_eq!(err.user_message(), MSG_LOGIN_REQUIRED);
}

// ---------------------------------------------------------------------------
// Server-side rejection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn server_rejection_prefers_mensaje() {
    let fake = common::serve(recording_route(
        Arc::default(),
        Arc::default(),
        StatusCode::BAD_REQUEST,
        json!({ "error": true, "mensaje": "Serial ya utilizado", "message": "Bad Request" }),
    ))
    .await;
    let api = common::client(&fake.base_url, Some(&common::session(Role::Vendor)));

    let err = api.register_client(&form(), attachments()).await.unwrap_err();
    assert_matches!(err, ApiError::Server { status: 400, ref message } if message == "Serial ya utilizado");
}

#[tokio::test]
async fn server_rejection_without_text_uses_fallback() {
    let fake = common::serve(recording_route(
        Arc::default(),
        Arc::default(),
        StatusCode::OK,
        json!({ "error": true }),
    ))
    .await;
    let api = common::client(&fake.base_url, Some(&common::session(Role::Vendor)));

    let err = api.register_client(&form(), attachments()).await.unwrap_err();
    assert_eq!(err.user_message(), "Error en el registro");
}
