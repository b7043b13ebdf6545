//! One handler per subcommand. Handlers return the text to print.

pub mod auth;
pub mod clients;
pub mod countdown;
pub mod dashboard;
pub mod raffle;
pub mod register;
pub mod serials;
pub mod settings;
pub mod vendors;

use anyhow::{anyhow, bail, Result};

use promo_client::{FileSessionStore, PromoApi};
use promo_core::navigation::{ensure_access, Section};
use promo_core::session::AuthData;

use crate::cli::Command;
use crate::config::ConsoleConfig;

pub const MSG_NO_SESSION: &str = "No hay sesión activa. Ejecuta `promo-console login` primero.";

/// Shared state for one invocation.
pub struct Context {
    pub api: PromoApi,
    pub config: ConsoleConfig,
}

impl Context {
    /// Build the HTTP client and file-backed session store from `config`.
    pub fn new(config: ConsoleConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        let store = FileSessionStore::new(&config.session_dir);
        let api = PromoApi::with_client(client, config.api_url.clone(), Box::new(store))
            .origin_https(config.origin_https);
        Ok(Self { api, config })
    }

    /// The stored session, refused unless its role may open `section`.
    pub fn require(&self, section: Section) -> Result<AuthData> {
        let user = self
            .api
            .current_user()?
            .ok_or_else(|| anyhow!(MSG_NO_SESSION))?;
        ensure_access(&user.rol, section)?;
        Ok(user)
    }
}

/// Convert a one-based CLI page to the API's zero-based index and check the
/// size against the sizes offered by the table.
pub(crate) fn page_request(page: u32, size: u32, sizes: &[u32]) -> Result<(u32, u32)> {
    if page == 0 {
        bail!("--page starts at 1");
    }
    if !sizes.contains(&size) {
        let offered = sizes.iter().map(u32::to_string).collect::<Vec<_>>().join(", ");
        bail!("--size must be one of {offered}");
    }
    Ok((page - 1, size))
}

pub async fn run(ctx: &Context, command: Command) -> Result<String> {
    match command {
        Command::Login { email, password } => auth::login(ctx, &email, &password).await,
        Command::Logout => auth::logout(ctx),
        Command::Whoami => auth::whoami(ctx),
        Command::Register(args) => register::run(ctx, args, tokio::io::BufReader::new(tokio::io::stdin())).await,
        Command::Dashboard { days } => dashboard::run(ctx, days).await,
        Command::Vendors(cmd) => vendors::run(ctx, cmd).await,
        Command::Serials(cmd) => serials::run(ctx, cmd).await,
        Command::Clients(cmd) => clients::run(ctx, cmd).await,
        Command::Raffle { target, action } => raffle::run(ctx, target.into(), action).await,
        Command::Settings(cmd) => settings::run(ctx, cmd).await,
        Command::Countdown { watch } => countdown::run(ctx, watch).await,
        Command::CampaignConfig => {
            let config = ctx.api.public_config().await?;
            Ok(serde_json::to_string_pretty(&config)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_one_based_on_the_command_line() {
        assert_eq!(page_request(1, 10, &[10, 25]).unwrap(), (0, 10));
        assert_eq!(page_request(3, 25, &[10, 25]).unwrap(), (2, 25));
        assert!(page_request(0, 10, &[10, 25]).is_err());
        let err = page_request(1, 12, &[10, 25]).unwrap_err();
        assert_eq!(err.to_string(), "--size must be one of 10, 25");
    }
}
