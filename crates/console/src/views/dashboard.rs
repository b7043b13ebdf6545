//! Overview panels rendered as text bars.

use chrono::NaiveDate;

use promo_core::activity::{bar_height_percent, pad_activity, scale_denominator};
use promo_core::dashboard::{heat_widths, DashboardSnapshot, MSG_HEAT_MAP_EMPTY, MSG_NO_DATA};

use super::table::Table;

/// Width of a 100% bar in characters.
const BAR_WIDTH: usize = 30;

fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize;
    format!("{}{}", "█".repeat(filled), "·".repeat(BAR_WIDTH - filled))
}

pub fn render(snapshot: &DashboardSnapshot, today: NaiveDate) -> String {
    let mut out = Vec::new();

    out.push("== Resumen ==".to_string());
    for (label, value) in snapshot.summary.cards() {
        out.push(format!("{label}: {value}"));
    }

    out.push(String::new());
    out.push("== Top vendedores ==".to_string());
    if snapshot.top_sellers.is_empty() {
        out.push(MSG_NO_DATA.to_string());
    } else {
        let mut table = Table::new(&["#", "Vendedor", "Tienda", "Ciudad", "Ventas"]);
        for (i, s) in snapshot.top_sellers.iter().enumerate() {
            table.row(vec![
                (i + 1).to_string(),
                s.nombre_vendedor.clone(),
                s.tienda.clone(),
                s.ciudad.clone(),
                s.cantidad_ventas.to_string(),
            ]);
        }
        out.push(table.render());
    }

    out.push(String::new());
    out.push("== Mapa de calor ==".to_string());
    if snapshot.heat_map.is_empty() {
        out.push(MSG_HEAT_MAP_EMPTY.to_string());
    } else {
        for (zone, width) in snapshot.heat_map.iter().zip(heat_widths(&snapshot.heat_map)) {
            out.push(format!("{:<12} {} {}", zone.departamento, bar(width), zone.cantidad_ventas));
        }
    }

    out.push(String::new());
    out.push(format!("== Ritmo de juego ({} días) ==", snapshot.window.days()));
    let bars = pad_activity(&snapshot.activity, snapshot.window, today);
    let denominator = scale_denominator(&bars);
    for b in &bars {
        let marker = if b.is_today { "*" } else { " " };
        out.push(format!(
            "{}{} {} {}",
            b.label(),
            marker,
            bar(bar_height_percent(b.count, denominator)),
            b.count
        ));
    }

    out.join("\n")
}
