//! Response envelope and page types shared by every API endpoint.
//!
//! All JSON responses use a `{ "error": bool, "message": string, "data": T }`
//! envelope. A few endpoints spell the message key `mensaje`; both are
//! accepted.

use serde::Deserialize;

/// Standard `{ error, message, data }` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default = "none")]
    pub data: Option<T>,
}

fn none<T>() -> Option<T> {
    None
}

/// Which message key an endpoint reports its text under first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    Message,
    Mensaje,
}

impl<T> Envelope<T> {
    /// Message text, looking at `message` first and `mensaje` second.
    /// Empty strings count as absent.
    pub fn message(&self) -> Option<&str> {
        self.message_by(MessageKey::Message)
    }

    /// Message text, looking at the preferred key first.
    pub fn message_by(&self, key: MessageKey) -> Option<&str> {
        let (first, second) = match key {
            MessageKey::Message => (&self.message, &self.mensaje),
            MessageKey::Mensaje => (&self.mensaje, &self.message),
        };
        non_empty(first).or_else(|| non_empty(second))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// One server-side page of records.
///
/// Missing fields default to an empty page, mirroring how list views treat
/// partial responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub first: Option<bool>,
    #[serde(default)]
    pub last: Option<bool>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
            total_elements: 0,
            size: 0,
            number: 0,
            first: None,
            last: None,
        }
    }
}
