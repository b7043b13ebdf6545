/// Client-side failures detected before any request is sent.
///
/// The display text is the message shown to the user, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),
}

impl CoreError {
    /// The user-facing message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            CoreError::Validation(msg) | CoreError::Unauthorized(msg) | CoreError::Forbidden(msg) => {
                msg
            }
        }
    }
}
