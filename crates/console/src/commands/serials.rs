use std::path::PathBuf;

use anyhow::{Context as _, Result};
use chrono::Local;

use promo_client::UploadFile;
use promo_core::navigation::Section;
use promo_core::pagination::ListView;
use promo_core::serial::{export_file_name, filter_serials, SerialFilter, MSG_EXCEL_EXPORTED, SERIAL_PAGE_SIZES};

use super::{page_request, Context};
use crate::cli::SerialsCommand;
use crate::views::{dialog, lists};

pub async fn run(ctx: &Context, cmd: SerialsCommand) -> Result<String> {
    ctx.require(Section::Serials)?;
    match cmd {
        SerialsCommand::List {
            page,
            size,
            search,
            status,
        } => {
            let (page, size) = page_request(page, size, SERIAL_PAGE_SIZES)?;
            let status: SerialFilter = status.parse().map_err(anyhow::Error::msg)?;

            let mut view = ListView::new(size);
            view.set_term(search);
            view.state.request(page);
            view.begin_fetch();
            let (fetched, stats) = tokio::join!(
                ctx.api.serials(view.state.page(), view.state.size()),
                ctx.api.serial_stats(),
            );
            match fetched {
                Ok(page) => view.loaded(page),
                Err(e) => {
                    view.failed();
                    tracing::error!(error = %e, "Serial page fetch failed");
                }
            }

            let stats = stats.unwrap_or_default();
            let rows = filter_serials(view.rows(), view.term(), status);
            Ok(format!("{}\n\n{}", lists::serial_stats(&stats), lists::serials(&view, rows)))
        }
        SerialsCommand::Stats => Ok(lists::serial_stats(&ctx.api.serial_stats().await?)),
        SerialsCommand::Import { file } => {
            let upload = UploadFile::from_path(&file).await?;
            let message = ctx.api.upload_serials_csv(upload).await?;
            tracing::info!(file = %file.display(), "Serial CSV uploaded");
            let stats = ctx.api.serial_stats().await.unwrap_or_default();
            Ok(format!("{}\n{}", dialog::success(&message), lists::serial_stats(&stats)))
        }
        SerialsCommand::Export { output } => {
            let bytes = ctx.api.export_serials_excel().await?;
            let path = output.unwrap_or_else(|| PathBuf::from(export_file_name(Local::now().date_naive())));
            tokio::fs::write(&path, &bytes)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(dialog::success(&format!("{MSG_EXCEL_EXPORTED}: {}", path.display())))
        }
    }
}
