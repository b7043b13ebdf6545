use anyhow::Result;

use promo_core::navigation::{landing_view, visible_sections, LandingView};
use promo_core::session::AuthData;

use super::Context;
use crate::views::{self, dialog};

fn next_step(user: &AuthData) -> &'static str {
    match landing_view(&user.rol) {
        LandingView::Dashboard => "Siguiente: promo-console dashboard",
        LandingView::Registration => "Siguiente: promo-console register --help",
    }
}

pub async fn login(ctx: &Context, email: &str, password: &str) -> Result<String> {
    let user = ctx.api.login(email, password).await?;
    Ok(format!(
        "{}\n{}\n\nSecciones:\n{}",
        dialog::success(&format!("Bienvenido, {} ({})", user.nombre, user.rol)),
        next_step(&user),
        views::menu(&visible_sections(&user.rol)),
    ))
}

pub fn logout(ctx: &Context) -> Result<String> {
    ctx.api.logout()?;
    Ok(dialog::success("Sesión cerrada"))
}

pub fn whoami(ctx: &Context) -> Result<String> {
    let Some(user) = ctx.api.current_user()? else {
        return Ok(super::MSG_NO_SESSION.to_string());
    };
    Ok(format!(
        "{} <{}> · {}\n\nSecciones:\n{}",
        user.nombre,
        user.email,
        user.rol,
        views::menu(&visible_sections(&user.rol)),
    ))
}
