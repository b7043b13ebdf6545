use std::time::Duration;

use anyhow::Result;

use promo_core::navigation::Section;
use promo_core::raffle::RaffleKind;

use super::Context;
use crate::cli::RaffleAction;
use crate::views::{self, dialog};

/// Pause before re-reading the winner list after a draw.
const DRAW_SETTLE: Duration = Duration::from_secs(1);

async fn winners(ctx: &Context, kind: RaffleKind) -> Result<(usize, String)> {
    Ok(match kind {
        RaffleKind::Clients => {
            let winners = ctx.api.client_winners().await?;
            (winners.len(), views::raffle::clients(&winners))
        }
        RaffleKind::Vendors => {
            let winners = ctx.api.vendor_winners().await?;
            (winners.len(), views::raffle::vendors(&winners))
        }
    })
}

pub async fn run(ctx: &Context, kind: RaffleKind, action: Option<RaffleAction>) -> Result<String> {
    ctx.require(Section::Raffle)?;
    match action.unwrap_or(RaffleAction::Winners) {
        RaffleAction::Winners => Ok(winners(ctx, kind).await?.1),
        RaffleAction::Draw => {
            let (count, _) = winners(ctx, kind).await?;
            kind.ensure_can_draw(count)?;

            let message = ctx.api.draw(kind).await?;
            tokio::time::sleep(DRAW_SETTLE).await;
            let (_, table) = winners(ctx, kind).await?;
            Ok(match message {
                Some(message) => format!("{}\n\n{table}", dialog::success(&message)),
                None => table,
            })
        }
    }
}
