use anyhow::Result;
use chrono::Local;

use promo_core::activity::ActivityWindow;
use promo_core::navigation::Section;

use super::Context;
use crate::views;

pub async fn run(ctx: &Context, days: u32) -> Result<String> {
    ctx.require(Section::Overview)?;
    let window = ActivityWindow::try_from(days).map_err(anyhow::Error::msg)?;
    let snapshot = ctx.api.dashboard(window).await;
    Ok(views::dashboard::render(&snapshot, Local::now().date_naive()))
}
