use anyhow::{Context as _, Result};

use promo_core::navigation::Section;
use promo_core::pagination::ListView;
use promo_core::registrations::{DocumentKind, CLIENT_PAGE_SIZES};

use super::{page_request, Context};
use crate::cli::ClientsCommand;
use crate::views::{dialog, lists};

fn kinds(kind: &str) -> Result<Vec<DocumentKind>> {
    if kind == "all" {
        return Ok(DocumentKind::ALL.to_vec());
    }
    Ok(vec![kind.parse().map_err(anyhow::Error::msg)?])
}

pub async fn run(ctx: &Context, cmd: ClientsCommand) -> Result<String> {
    ctx.require(Section::Players)?;
    match cmd {
        ClientsCommand::List { page, size, search } => {
            let (page, size) = page_request(page, size, CLIENT_PAGE_SIZES)?;
            let mut view = ListView::new(size);
            view.set_term(search);
            view.state.request(page);
            view.begin_fetch();
            match ctx.api.clients(view.state.page(), view.state.size()).await {
                Ok(page) => view.loaded(page),
                Err(e) => {
                    view.failed();
                    tracing::error!(error = %e, "Client page fetch failed");
                }
            }
            Ok(lists::clients(&view))
        }
        ClientsCommand::Documents {
            registro_id,
            kind,
            out_dir,
        } => {
            let mut saved = Vec::new();
            for kind in kinds(&kind)? {
                let bytes = ctx.api.registration_document(registro_id, kind).await?;
                let path = out_dir.join(kind.file_name(registro_id));
                tokio::fs::write(&path, &bytes)
                    .await
                    .with_context(|| format!("failed to write {}", path.display()))?;
                saved.push(path.display().to_string());
            }
            Ok(dialog::success(&format!("Documentos guardados: {}", saved.join(", "))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_expands_to_every_document() {
        assert_eq!(kinds("all").unwrap().len(), 3);
        assert_eq!(kinds("nota_venta").unwrap(), vec![DocumentKind::SalesNote]);
        assert!(kinds("selfie").is_err());
    }
}
