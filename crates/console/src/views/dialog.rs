//! Success and error dialogs.

use console::style;

use promo_core::registration::RegistrationState;

pub fn success(text: &str) -> String {
    format!("{} {text}", style("✔").green().bold())
}

pub fn error(text: &str) -> String {
    format!("{} {text}", style("✖").red().bold())
}

pub fn warning(text: &str) -> String {
    format!("{} {text}", style("⚠").yellow().bold())
}

/// Outcome dialog for a registration attempt. Editing and submitting
/// states render nothing.
pub fn registration(state: &RegistrationState, whatsapp_warning: Option<&str>) -> Option<String> {
    match state {
        RegistrationState::Success { coupons, message } => {
            let mut out = vec![
                success("¡GOLAZO!"),
                message.clone(),
                "Se han generado tus cupones exitosamente:".to_string(),
            ];
            out.extend(
                coupons
                    .iter()
                    .enumerate()
                    .map(|(i, code)| format!("  {}. {code}", i + 1)),
            );
            if let Some(w) = whatsapp_warning {
                out.push(warning(w));
            }
            Some(out.join("\n"))
        }
        RegistrationState::Failure { message } => Some(error(message)),
        RegistrationState::Editing | RegistrationState::Submitting => None,
    }
}
