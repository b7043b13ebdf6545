use std::path::PathBuf;

use anyhow::{bail, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use promo_client::UploadFile;
use promo_core::registration::{
    ensure_seller, normalize_serial, Attachments, RegistrationForm, RegistrationState, MSG_REGISTRATION_OK,
};

use super::Context;
use crate::cli::RegisterArgs;
use crate::views::dialog;

/// Read one scanned code from `input`.
pub async fn scan_code(mut input: impl AsyncBufRead + Unpin) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line).await?;
    let code = normalize_serial(&line);
    if code.is_empty() {
        bail!("No se leyó ningún código del escáner");
    }
    Ok(code)
}

async fn load(path: Option<PathBuf>) -> Result<Option<UploadFile>> {
    match path {
        Some(path) => Ok(Some(UploadFile::from_path(path).await?)),
        None => Ok(None),
    }
}

pub async fn run(ctx: &Context, args: RegisterArgs, scanner: impl AsyncBufRead + Unpin) -> Result<String> {
    let session = ctx.api.current_user()?;
    ensure_seller(session.as_ref())?;

    let code = match (args.scan, args.code) {
        (true, _) => {
            let code = scan_code(scanner).await?;
            tracing::info!(code = %code, "Serial scanned");
            code
        }
        (false, Some(code)) => code,
        (false, None) => bail!("Ingresa el código con --code o usa --scan"),
    };

    let form = RegistrationForm {
        first_name: args.first_name,
        last_name: args.last_name,
        ci: args.ci,
        email: args.email,
        phone: args.phone,
        document_type: args.document_type,
        issue_place: args.issue_place,
        code,
        terms: args.accept_terms,
    };
    let attachments = Attachments {
        id_front: load(args.id_front).await?,
        id_back: load(args.id_back).await?,
        invoice: load(args.invoice).await?,
    };

    let mut state = RegistrationState::default();
    state.begin_submit()?;
    match ctx.api.register_client(&form, attachments).await {
        Ok(reply) => {
            let warning = reply.data.whatsapp_warning();
            let message = reply.message_or(MSG_REGISTRATION_OK);
            state.succeed(reply.data.codigos_cupones, message)?;
            Ok(dialog::registration(&state, warning.as_deref()).unwrap_or_default())
        }
        Err(e) => {
            state.fail(e.user_message())?;
            tracing::warn!(error = %e, "Registration failed");
            Err(e.into())
        }
    }
}
