use promo_core::raffle::{city_distribution, CouponWinner, RaffleKind, VendorWinner};

use super::table::Table;

fn header(kind: RaffleKind, winners: usize) -> String {
    let status = if kind.is_complete(winners) {
        "✅ Sorteo Completo"
    } else {
        "En curso"
    };
    format!("{}\n{} · {status}", kind.title(), kind.progress_label(winners))
}

pub fn clients(winners: &[CouponWinner]) -> String {
    let mut out = vec![header(RaffleKind::Clients, winners.len())];
    if winners.is_empty() {
        out.push("Aún no hay ganadores".to_string());
    } else {
        let mut table = Table::new(&["Pos.", "Cupón", "Cliente", "CI", "Fecha"]);
        for w in winners {
            table.row(vec![
                w.posicion.to_string(),
                w.codigo_cupon.clone(),
                w.nombre_cliente.clone(),
                w.ci_cliente.clone(),
                w.fecha_sorteo.clone().unwrap_or_default(),
            ]);
        }
        out.push(table.render());
    }
    out.join("\n\n")
}

pub fn vendors(winners: &[VendorWinner]) -> String {
    let mut out = vec![header(RaffleKind::Vendors, winners.len())];
    if winners.is_empty() {
        out.push("Aún no hay ganadores".to_string());
    } else {
        let mut table = Table::new(&["Pos.", "Vendedor", "CI", "Tienda", "Ciudad", "Ventas"]);
        for w in winners {
            table.row(vec![
                w.posicion.to_string(),
                w.nombre_vendedor.clone(),
                w.ci_vendedor.clone(),
                w.tienda.clone(),
                w.ciudad.clone(),
                w.cantidad_ventas.to_string(),
            ]);
        }
        out.push(table.render());
    }
    let distribution = city_distribution(winners)
        .iter()
        .map(|(city, n)| format!("{city}: {n}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push(format!("Distribución por ciudad: {distribution}"));
    out.join("\n\n")
}
