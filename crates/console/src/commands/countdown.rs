use std::time::Duration;

use anyhow::Result;
use chrono::Local;

use promo_core::countdown::time_left;

use super::Context;
use crate::views;

pub async fn run(ctx: &Context, watch: bool) -> Result<String> {
    let left = time_left(ctx.config.draw_date, Local::now().naive_local());
    if !watch || left.is_zero() {
        return Ok(views::countdown(&left));
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let left = time_left(ctx.config.draw_date, Local::now().naive_local());
                eprint!("\r\x1b[2K{}", views::countdown(&left));
                if left.is_zero() {
                    eprintln!();
                    return Ok(views::countdown(&left));
                }
            }
            _ = tokio::signal::ctrl_c() => {
                eprintln!();
                return Ok(String::new());
            }
        }
    }
}
