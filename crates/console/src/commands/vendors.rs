use anyhow::Result;

use promo_core::filter::filter_items;
use promo_core::navigation::Section;
use promo_core::roles::Role;
use promo_core::vendor::{NewVendor, MSG_VENDOR_DEACTIVATED};

use super::Context;
use crate::cli::VendorsCommand;
use crate::views::{dialog, lists};

pub async fn run(ctx: &Context, cmd: VendorsCommand) -> Result<String> {
    ctx.require(Section::VendorRegistration)?;
    match cmd {
        VendorsCommand::List { search } => {
            let vendors = ctx.api.vendors().await.unwrap_or_else(|e| {
                tracing::error!(error = %e, "Vendor list fetch failed");
                Vec::new()
            });
            Ok(lists::vendors(&filter_items(&vendors, &search)))
        }
        VendorsCommand::Create {
            nombre,
            ci,
            tienda,
            ciudad,
            email,
            password,
            admin,
        } => {
            let vendor = NewVendor {
                nombre,
                ci,
                tienda,
                ciudad,
                email,
                password,
                rol_nombre: if admin { Role::Admin } else { Role::Vendor },
            };
            let message = ctx.api.create_vendor(&vendor).await?;
            tracing::info!(email = %vendor.email, "Vendor created");
            Ok(dialog::success(&message))
        }
        VendorsCommand::Deactivate { id } => {
            ctx.api.deactivate_vendor(id).await?;
            tracing::info!(vendor_id = id, "Vendor deactivated");
            Ok(dialog::success(MSG_VENDOR_DEACTIVATED))
        }
    }
}
