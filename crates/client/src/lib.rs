//! HTTP client for the campaign API.
//!
//! [`PromoApi`] wraps every endpoint the console uses. The login session
//! lives in a [`SessionStore`] so it survives between invocations.

pub mod api;
pub mod endpoints;
pub mod error;
pub mod session;
pub mod upload;

pub use api::{PromoApi, Reply};
pub use error::ApiError;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, StoreError};
pub use upload::UploadFile;
