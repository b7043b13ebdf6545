use std::time::Duration;

use anyhow::{bail, Result};

use promo_core::navigation::Section;
use promo_core::settings::triggers_whatsapp_test;

use super::Context;
use crate::cli::SettingsCommand;
use crate::views::{self, dialog};

/// Delay before the connectivity check that follows a WhatsApp update.
const WHATSAPP_RECHECK_DELAY: Duration = Duration::from_millis(500);

async fn whatsapp_check(ctx: &Context) -> Result<String> {
    let check = ctx.api.test_whatsapp().await?;
    match check.outcome() {
        Ok(message) => Ok(dialog::success(message)),
        Err(message) => bail!(message),
    }
}

pub async fn run(ctx: &Context, cmd: SettingsCommand) -> Result<String> {
    ctx.require(Section::Settings)?;
    match cmd {
        SettingsCommand::List => Ok(views::settings::grouped(&ctx.api.settings().await?)),
        SettingsCommand::Category { categoria } => {
            let settings = ctx.api.settings_by_category(&categoria).await?;
            Ok(views::settings::flat(&settings))
        }
        SettingsCommand::Set { clave, valor } => {
            let message = ctx.api.update_setting(&clave, &valor).await?;
            tracing::info!(clave = %clave, "Setting updated");
            let mut out = dialog::success(&message);
            if triggers_whatsapp_test(&clave) {
                tokio::time::sleep(WHATSAPP_RECHECK_DELAY).await;
                let check = match whatsapp_check(ctx).await {
                    Ok(text) => text,
                    Err(e) => dialog::warning(&e.to_string()),
                };
                out = format!("{out}\n{check}");
            }
            Ok(out)
        }
        SettingsCommand::TestWhatsapp => whatsapp_check(ctx).await,
        SettingsCommand::RefreshCache => Ok(dialog::success(ctx.api.refresh_settings_cache().await?)),
        SettingsCommand::Stats => Ok(serde_json::to_string_pretty(&ctx.api.settings_stats().await?)?),
    }
}
