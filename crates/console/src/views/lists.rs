//! Serial, customer and seller tables.

use promo_core::filter::empty_state_message;
use promo_core::pagination::{ListView, PageState};
use promo_core::registrations::{ClientRecord, CLIENTS_EMPTY, CLIENTS_EMPTY_FILTERED};
use promo_core::serial::{Serial, SerialStats, SERIALS_EMPTY, SERIALS_EMPTY_FILTERED};
use promo_core::vendor::Vendor;

use super::table::Table;

const LOADING: &str = "Cargando...";

/// Page-number strip with the current page bracketed, one-based.
pub fn page_controls(state: &PageState) -> String {
    if state.total_pages() == 0 {
        return String::new();
    }
    let buttons: Vec<String> = state
        .window()
        .into_iter()
        .map(|p| {
            if p == state.page() {
                format!("[{}]", p + 1)
            } else {
                (p + 1).to_string()
            }
        })
        .collect();
    let prev = if state.page() == 0 { " " } else { "«" };
    let next = if state.page() + 1 >= state.total_pages() { " " } else { "»" };
    format!("{prev} {} {next}", buttons.join(" "))
}

fn footer(state: &PageState, noun: &str) -> String {
    format!("{}\n{}", state.showing().label(noun), page_controls(state))
}

fn opt(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

pub fn serials<'a>(view: &ListView<Serial>, rows: impl IntoIterator<Item = &'a Serial>) -> String {
    if view.is_loading() {
        return LOADING.to_string();
    }
    let mut table = Table::new(&["ID", "Código", "Modelo", "Pulgadas", "Tickets", "Estado", "Fecha de uso"]);
    for s in rows {
        table.row(vec![
            s.id.to_string(),
            opt(s.code.as_deref()),
            opt(s.tv_model.as_deref()),
            format!("{}\"", s.inches),
            format!("x{}", s.ticket_multiplier),
            s.status_label().to_string(),
            opt(s.fecha_uso.as_deref()),
        ]);
    }
    if table.is_empty() {
        return empty_state_message(view.term(), SERIALS_EMPTY_FILTERED, SERIALS_EMPTY).to_string();
    }
    format!("{}\n\n{}", table.render(), footer(&view.state, "seriales"))
}

pub fn serial_stats(stats: &SerialStats) -> String {
    format!(
        "Disponibles: {}  Usados: {}  Total: {}",
        stats.disponibles, stats.usados, stats.total
    )
}

pub fn clients(view: &ListView<ClientRecord>) -> String {
    if view.is_loading() {
        return LOADING.to_string();
    }
    let mut table = Table::new(&["Reg.", "Cliente", "CI", "Teléfono", "Serial", "Modelo", "Cupones", "Vendedor", "Fecha"]);
    for c in view.visible() {
        let coupons = c
            .cupones
            .iter()
            .map(|cup| {
                if cup.is_active() {
                    cup.codigo.clone()
                } else {
                    format!("{} ({})", cup.codigo, cup.estado)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        table.row(vec![
            c.registro_id.to_string(),
            opt(c.nombre_cliente.as_deref()),
            opt(c.ci.as_deref()),
            opt(c.telefono.as_deref()),
            opt(c.serial_tv.as_deref()),
            opt(c.modelo_tv.as_deref()),
            format!("{} [{}]", c.cantidad_cupones, coupons),
            opt(c.nombre_vendedor.as_deref()),
            opt(c.fecha_registro.as_deref()),
        ]);
    }
    if table.is_empty() {
        return empty_state_message(view.term(), CLIENTS_EMPTY_FILTERED, CLIENTS_EMPTY).to_string();
    }
    format!("{}\n\n{}", table.render(), footer(&view.state, "jugadores"))
}

pub fn vendors(rows: &[&Vendor]) -> String {
    if rows.is_empty() {
        return "No hay vendedores registrados".to_string();
    }
    let mut table = Table::new(&["ID", "Nombre", "CI", "Tienda", "Ciudad", "Email", "Estado"]);
    for v in rows {
        table.row(vec![
            v.id.to_string(),
            v.nombre.clone(),
            v.ci.clone(),
            v.tienda.clone(),
            v.ciudad.clone(),
            v.email.clone(),
            v.status_label().to_string(),
        ]);
    }
    table.render()
}

#[cfg(test)]
mod tests {
    use promo_core::envelope::Page;

    use super::*;

    fn serial(id: i64, code: &str) -> Serial {
        Serial {
            id,
            code: Some(code.to_string()),
            tv_model: Some("Q75".to_string()),
            inches: 55,
            ticket_multiplier: 2,
            usado: false,
            fecha_uso: None,
            registro: None,
        }
    }

    fn loaded(rows: Vec<Serial>, total_pages: u32, total_elements: u64) -> ListView<Serial> {
        let mut view = ListView::new(10);
        view.loaded(Page {
            content: rows,
            total_pages,
            total_elements,
            ..Page::default()
        });
        view
    }

    #[test]
    fn page_controls_bracket_current_page() {
        let mut state = PageState::new(10);
        state.record_totals(&Page::<()> {
            total_pages: 12,
            total_elements: 120,
            ..Page::default()
        });
        state.go_to(5);
        assert_eq!(page_controls(&state), "« 4 5 [6] 7 8 »");

        state.go_to(0);
        assert_eq!(page_controls(&state), "  [1] 2 3 4 5 »");
    }

    #[test]
    fn serial_table_has_footer() {
        let view = loaded(vec![serial(1, "SKY-1"), serial(2, "SKY-2")], 3, 21);
        let out = serials(&view, view.rows());
        assert!(out.contains("SKY-2"));
        assert!(out.contains("LIBRE"));
        assert!(out.contains("Mostrando 1 - 10 de 21 seriales"));
    }

    #[test]
    fn empty_states_depend_on_filter() {
        let mut view = loaded(Vec::new(), 0, 0);
        assert_eq!(serials(&view, view.rows()), SERIALS_EMPTY);
        view.set_term("zzz");
        assert_eq!(serials(&view, view.rows()), SERIALS_EMPTY_FILTERED);
    }

    #[test]
    fn loading_state() {
        let mut view: ListView<ClientRecord> = ListView::new(10);
        view.begin_fetch();
        assert_eq!(clients(&view), LOADING);
    }
}
