//! REST client for the campaign API.
//!
//! Every JSON endpoint answers with the `{ error, message | mensaje, data }`
//! envelope. [`PromoApi::call`] turns transport failures, non-2xx statuses
//! and `error: true` bodies into [`ApiError`] variants; the public methods
//! only pick the message key, the fallback text and how `data` is read.

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use promo_core::activity::{ActivityWindow, DailyCount};
use promo_core::dashboard::{DashboardSnapshot, HeatZone, Summary, TopSeller, TOP_SELLER_LIMIT};
use promo_core::envelope::{Envelope, MessageKey, Page};
use promo_core::raffle::{CouponWinner, RaffleKind, VendorWinner, MSG_DRAW_FAILED};
use promo_core::registration::{
    self, Attachments, RegistrationForm, RegistrationReceipt, MSG_REGISTRATION_FAILED,
};
use promo_core::registrations::{ClientRecord, DocumentKind};
use promo_core::serial::{
    Serial, SerialStats, MSG_CSV_UPLOADED, MSG_CSV_UPLOAD_FAILED, MSG_EXCEL_EXPORT_FAILED,
};
use promo_core::session::{AuthData, LoginRequest, MSG_LOGIN_FAILED};
use promo_core::settings::{
    Setting, SettingUpdate, WhatsAppCheck, MSG_CACHE_REFRESHED, MSG_CACHE_REFRESH_FAILED,
    MSG_SETTING_UPDATED, MSG_SETTING_UPDATE_FAILED, MSG_WHATSAPP_TEST_FAILED,
};
use promo_core::types::DbId;
use promo_core::vendor::{NewVendor, Vendor, MSG_VENDOR_CREATE_FAILED, MSG_VENDOR_DEACTIVATE_FAILED};

use crate::endpoints;
use crate::error::{is_mixed_content, ApiError};
use crate::session::{SessionStore, KEY_AUTH_TOKEN, KEY_USER_DATA};
use crate::upload::UploadFile;

/// Fallback shown when a read endpoint fails without a message.
const MSG_LOAD_FAILED: &str = "Error al cargar datos";
const MSG_DOCUMENT_FAILED: &str = "Error al descargar imagen";

/// Multipart part carrying the serial CSV.
const PART_CSV: &str = "archivo";

/// Decoded `data` plus the server's message, if it sent one.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub data: T,
    pub message: Option<String>,
}

impl<T> Reply<T> {
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

/// Client for one campaign API deployment.
pub struct PromoApi {
    client: reqwest::Client,
    base_url: String,
    origin_https: bool,
    store: Box<dyn SessionStore>,
}

impl PromoApi {
    /// * `base_url` - e.g. `http://localhost:7000`, without a trailing slash.
    pub fn new(base_url: impl Into<String>, store: Box<dyn SessionStore>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, store)
    }

    /// Reuse a configured [`reqwest::Client`] (timeouts, proxies).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        store: Box<dyn SessionStore>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            origin_https: false,
            store,
        }
    }

    /// Mark the calling page as served over HTTPS, so transport failures
    /// against a plain-HTTP API are reported as mixed content.
    pub fn origin_https(mut self, origin_https: bool) -> Self {
        self.origin_https = origin_https;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- session ----

    /// Authenticate and persist the token and profile.
    ///
    /// Nothing is stored unless the server accepted the credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthData, ApiError> {
        let request = self
            .client
            .post(self.url(endpoints::LOGIN))
            .json(&LoginRequest { email, password });

        let envelope = self.call(request, MessageKey::Message, MSG_LOGIN_FAILED).await?;
        let auth: AuthData = Self::data(envelope)?;

        let profile = serde_json::to_string(&auth).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.store.set(KEY_AUTH_TOKEN, &auth.token)?;
        self.store.set(KEY_USER_DATA, &profile)?;

        tracing::info!(email = %auth.email, rol = %auth.rol, "Logged in");
        Ok(auth)
    }

    pub fn logout(&self) -> Result<(), ApiError> {
        self.store.remove(KEY_AUTH_TOKEN)?;
        self.store.remove(KEY_USER_DATA)?;
        tracing::info!("Logged out");
        Ok(())
    }

    pub fn token(&self) -> Result<Option<String>, ApiError> {
        Ok(self.store.get(KEY_AUTH_TOKEN)?.filter(|t| !t.is_empty()))
    }

    /// Stored profile. An unreadable profile counts as no session.
    pub fn current_user(&self) -> Result<Option<AuthData>, ApiError> {
        let Some(raw) = self.store.get(KEY_USER_DATA)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(error = %e, "Stored profile is unreadable, ignoring it");
                Ok(None)
            }
        }
    }

    pub fn is_authenticated(&self) -> Result<bool, ApiError> {
        Ok(self.token()?.is_some())
    }

    // ---- registration ----

    /// Submit a customer registration as the logged-in seller.
    ///
    /// Session, attachments and consent are checked first; a rejected form
    /// never reaches the network.
    pub async fn register_client(
        &self,
        form: &RegistrationForm,
        attachments: Attachments<UploadFile>,
    ) -> Result<Reply<RegistrationReceipt>, ApiError> {
        let session = self.current_user()?;
        let (fields, files) = registration::prepare(form, attachments, session.as_ref())?;

        let mut multipart = Form::new();
        for (name, value) in fields.pairs() {
            multipart = multipart.text(name, value.to_string());
        }
        for (name, file) in files.into_parts() {
            multipart = multipart.part(name, file.into_part()?);
        }

        tracing::info!(
            serial = %fields.serial_ingresado,
            vendedor = %fields.vendedor_email,
            "Submitting registration",
        );

        let request = self.upload_request(endpoints::REGISTER_CLIENT)?.multipart(multipart);
        let envelope = self
            .call(request, MessageKey::Mensaje, MSG_REGISTRATION_FAILED)
            .await?;
        let message = envelope.message().map(str::to_string);
        Ok(Reply {
            data: Self::data_or_default(envelope)?,
            message,
        })
    }

    // ---- dashboard ----

    pub async fn summary(&self) -> Result<Summary, ApiError> {
        self.fetch(endpoints::DASHBOARD_SUMMARY).await
    }

    pub async fn top_sellers(&self, limit: u32) -> Result<Vec<TopSeller>, ApiError> {
        self.fetch(&endpoints::top_sellers(limit)).await
    }

    pub async fn heat_map(&self) -> Result<Vec<HeatZone>, ApiError> {
        self.fetch(endpoints::DASHBOARD_HEAT_MAP).await
    }

    pub async fn activity(&self, window: ActivityWindow) -> Result<Vec<DailyCount>, ApiError> {
        self.fetch(&endpoints::activity(window.days())).await
    }

    /// Fetch the four overview panels concurrently. A failing panel is
    /// logged and left at its empty default.
    pub async fn dashboard(&self, window: ActivityWindow) -> DashboardSnapshot {
        let (summary, top_sellers, heat_map, activity) = tokio::join!(
            self.summary(),
            self.top_sellers(TOP_SELLER_LIMIT),
            self.heat_map(),
            self.activity(window),
        );
        DashboardSnapshot {
            summary: panel_or_default("summary", summary),
            top_sellers: panel_or_default("top_sellers", top_sellers),
            heat_map: panel_or_default("heat_map", heat_map),
            activity: panel_or_default("activity", activity),
            window,
        }
    }

    // ---- vendors ----

    pub async fn vendors(&self) -> Result<Vec<Vendor>, ApiError> {
        self.fetch(endpoints::VENDORS_LIST).await
    }

    /// Create a seller account. Returns the confirmation text.
    pub async fn create_vendor(&self, vendor: &NewVendor) -> Result<String, ApiError> {
        vendor.check()?;
        let request = self
            .json_request(Method::POST, endpoints::VENDOR_CREATE)?
            .json(vendor);
        self.call(request, MessageKey::Mensaje, MSG_VENDOR_CREATE_FAILED)
            .await?;
        tracing::info!(email = %vendor.email, tienda = %vendor.tienda, "Vendor created");
        Ok(vendor.created_message())
    }

    /// Soft-deactivate a seller account.
    pub async fn deactivate_vendor(&self, id: DbId) -> Result<(), ApiError> {
        let request = self.json_request(Method::PUT, &endpoints::vendor_deactivate(id))?;
        self.call(request, MessageKey::Message, MSG_VENDOR_DEACTIVATE_FAILED)
            .await?;
        tracing::info!(vendor_id = id, "Vendor deactivated");
        Ok(())
    }

    // ---- serials ----

    pub async fn serials(&self, page: u32, size: u32) -> Result<Page<Serial>, ApiError> {
        self.fetch(&endpoints::paged(endpoints::SERIALS_LIST, page, size))
            .await
    }

    pub async fn serial_stats(&self) -> Result<SerialStats, ApiError> {
        self.fetch(endpoints::SERIALS_STATS).await
    }

    /// Bulk-load serials from a CSV file. Returns the server's summary.
    pub async fn upload_serials_csv(&self, file: UploadFile) -> Result<String, ApiError> {
        tracing::info!(file = %file.file_name, bytes = file.bytes.len(), "Uploading serial CSV");
        let multipart = Form::new().part(PART_CSV, file.into_part()?);
        let request = self
            .upload_request(endpoints::SERIALS_UPLOAD_CSV)?
            .multipart(multipart);
        let envelope = self
            .call(request, MessageKey::Mensaje, MSG_CSV_UPLOAD_FAILED)
            .await?;
        Ok(envelope
            .message_by(MessageKey::Mensaje)
            .unwrap_or(MSG_CSV_UPLOADED)
            .to_string())
    }

    /// Excel workbook with every serial.
    pub async fn export_serials_excel(&self) -> Result<Vec<u8>, ApiError> {
        self.download(endpoints::SERIALS_EXPORT_EXCEL, MSG_EXCEL_EXPORT_FAILED)
            .await
    }

    // ---- registrations ----

    pub async fn clients(&self, page: u32, size: u32) -> Result<Page<ClientRecord>, ApiError> {
        self.fetch(&endpoints::paged(endpoints::CLIENTS_LIST, page, size))
            .await
    }

    /// Raw bytes of one uploaded registration document.
    pub async fn registration_document(
        &self,
        registro_id: DbId,
        kind: DocumentKind,
    ) -> Result<Vec<u8>, ApiError> {
        self.download(
            &endpoints::registration_document(registro_id, kind),
            MSG_DOCUMENT_FAILED,
        )
        .await
    }

    // ---- raffle ----

    /// Ask the server to draw the next winner. Returns the server message.
    pub async fn draw(&self, kind: RaffleKind) -> Result<Option<String>, ApiError> {
        let request = self.json_request(Method::POST, &endpoints::raffle_draw(kind))?;
        let envelope = self.call(request, MessageKey::Message, MSG_DRAW_FAILED).await?;
        tracing::info!(raffle = kind.path_segment(), "Draw completed");
        Ok(envelope.message().map(str::to_string))
    }

    pub async fn client_winners(&self) -> Result<Vec<CouponWinner>, ApiError> {
        self.fetch(&endpoints::raffle_winners(RaffleKind::Clients))
            .await
    }

    pub async fn vendor_winners(&self) -> Result<Vec<VendorWinner>, ApiError> {
        self.fetch(&endpoints::raffle_winners(RaffleKind::Vendors))
            .await
    }

    // ---- settings ----

    pub async fn settings(&self) -> Result<Vec<Setting>, ApiError> {
        self.fetch(endpoints::SETTINGS_LIST).await
    }

    pub async fn settings_by_category(&self, categoria: &str) -> Result<Vec<Setting>, ApiError> {
        self.fetch(&endpoints::settings_by_category(categoria)).await
    }

    pub async fn update_setting(&self, clave: &str, valor: &str) -> Result<String, ApiError> {
        let request = self
            .json_request(Method::PUT, &endpoints::setting_update(clave))?
            .json(&SettingUpdate { valor });
        let envelope = self
            .call(request, MessageKey::Mensaje, MSG_SETTING_UPDATE_FAILED)
            .await?;
        tracing::info!(clave, "Setting updated");
        Ok(envelope
            .message_by(MessageKey::Mensaje)
            .unwrap_or(MSG_SETTING_UPDATED)
            .to_string())
    }

    pub async fn test_whatsapp(&self) -> Result<WhatsAppCheck, ApiError> {
        let request = self.json_request(Method::POST, endpoints::SETTINGS_TEST_WHATSAPP)?;
        let envelope = self
            .call(request, MessageKey::Mensaje, MSG_WHATSAPP_TEST_FAILED)
            .await?;
        Self::data_or_default(envelope)
    }

    pub async fn refresh_settings_cache(&self) -> Result<&'static str, ApiError> {
        let request = self.json_request(Method::POST, endpoints::SETTINGS_REFRESH_CACHE)?;
        self.call(request, MessageKey::Mensaje, MSG_CACHE_REFRESH_FAILED)
            .await?;
        Ok(MSG_CACHE_REFRESHED)
    }

    pub async fn settings_stats(&self) -> Result<Value, ApiError> {
        self.fetch(endpoints::SETTINGS_STATS).await
    }

    /// Public campaign configuration. No login needed.
    pub async fn public_config(&self) -> Result<Value, ApiError> {
        self.fetch(endpoints::PUBLIC_CONFIG).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// JSON request with the bearer token when one is stored.
    fn json_request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let builder = self
            .client
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");
        self.authorize(builder)
    }

    /// Multipart request: only the bearer token, the transport sets the
    /// content type with its boundary.
    fn upload_request(&self, path: &str) -> Result<RequestBuilder, ApiError> {
        self.authorize(self.client.post(self.url(path)))
    }

    fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(match self.token()? {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(|source| {
            let mixed_content = is_mixed_content(self.origin_https, &self.base_url);
            tracing::warn!(
                url = %self.base_url,
                mixed_content,
                error = %source,
                "Request did not reach the server",
            );
            ApiError::Network {
                url: self.base_url.clone(),
                mixed_content,
                source,
            }
        })
    }

    /// Send and unwrap the envelope.
    ///
    /// * `key` - which message key the endpoint fills in first.
    /// * `fallback` - text used when a failed envelope carries no message.
    async fn call(
        &self,
        request: RequestBuilder,
        key: MessageKey,
        fallback: &str,
    ) -> Result<Envelope<Value>, ApiError> {
        let response = self.send(request).await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let parsed = if body.trim().is_empty() && status.is_success() {
            Ok(empty_envelope())
        } else {
            serde_json::from_str::<Envelope<Value>>(&body)
        };

        match parsed {
            Ok(envelope) if status.is_success() && !envelope.error => Ok(envelope),
            Ok(envelope) => {
                let message = envelope.message_by(key).unwrap_or(fallback).to_string();
                tracing::debug!(status = status.as_u16(), %message, "Request rejected");
                Err(ApiError::Server {
                    status: status.as_u16(),
                    message,
                })
            }
            Err(_) if !status.is_success() => Err(ApiError::Server {
                status: status.as_u16(),
                message: server_error_text(status, &body),
            }),
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }

    /// GET a JSON endpoint and read `data`, defaulting when absent.
    async fn fetch<T: DeserializeOwned + Default>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.json_request(Method::GET, path)?;
        let envelope = self.call(request, MessageKey::Message, MSG_LOAD_FAILED).await?;
        Self::data_or_default(envelope)
    }

    /// GET a binary endpoint.
    async fn download(&self, path: &str, fallback: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(self.json_request(Method::GET, path)?).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), path, "Download failed");
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: fallback.to_string(),
            });
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    fn data<T: DeserializeOwned>(envelope: Envelope<Value>) -> Result<T, ApiError> {
        let value = envelope
            .data
            .ok_or_else(|| ApiError::Decode("response carries no data".to_string()))?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn data_or_default<T: DeserializeOwned + Default>(
        envelope: Envelope<Value>,
    ) -> Result<T, ApiError> {
        match envelope.data {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string())),
        }
    }
}

fn empty_envelope() -> Envelope<Value> {
    Envelope {
        error: false,
        message: None,
        mensaje: None,
        data: None,
    }
}

/// Message for a failed response whose body is not an envelope.
fn server_error_text(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    let body = if body.is_empty() { "Sin respuesta" } else { body };
    format!("Error del servidor ({}): {body}", status.as_u16())
}

fn panel_or_default<T: Default>(panel: &str, result: Result<T, ApiError>) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!(panel, error = %e, "Dashboard panel failed to load");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_text_reports_body_or_placeholder() {
        assert_eq!(
            server_error_text(StatusCode::BAD_GATEWAY, ""),
            "Error del servidor (502): Sin respuesta"
        );
        assert_eq!(
            server_error_text(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            "Error del servidor (500): boom"
        );
    }

    #[test]
    fn reply_message_fallback() {
        let reply = Reply {
            data: (),
            message: None,
        };
        assert_eq!(reply.message_or("Registro exitoso"), "Registro exitoso");
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let api = PromoApi::new(
            "http://localhost:7000/",
            Box::new(crate::session::MemorySessionStore::new()),
        );
        assert_eq!(api.base_url(), "http://localhost:7000");
        assert_eq!(api.url(endpoints::LOGIN), "http://localhost:7000/api/auth/login");
    }
}
