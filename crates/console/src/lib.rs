//! Terminal front end for the campaign API: registration, back office and
//! raffle screens rendered as text.

pub mod cli;
pub mod commands;
pub mod config;
pub mod views;

use promo_client::ApiError;
use promo_core::error::CoreError;

/// Text shown to the operator for a failed command.
pub fn error_message(err: &anyhow::Error) -> String {
    if let Some(api) = err.downcast_ref::<ApiError>() {
        return api.user_message();
    }
    if let Some(core) = err.downcast_ref::<CoreError>() {
        return core.message().to_string();
    }
    format!("{err:#}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_show_their_message() {
        let err = anyhow::Error::from(CoreError::Forbidden("Acceso restringido".into()));
        assert_eq!(error_message(&err), "Acceso restringido");

        let err = anyhow::Error::from(ApiError::Server {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(error_message(&err), "boom");
    }

    #[test]
    fn other_errors_keep_their_chain() {
        let err = anyhow::anyhow!("disk full").context("failed to write seriales.xlsx");
        assert_eq!(error_message(&err), "failed to write seriales.xlsx: disk full");
    }
}
