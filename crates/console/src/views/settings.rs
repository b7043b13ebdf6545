use promo_core::settings::{category_icon, group_by_category, Setting};

const RESTART_BADGE: &str = "⚠️ Requiere Reinicio";

fn entry(s: &Setting) -> String {
    let mut line = format!("  {} = {}", s.clave, s.valor);
    if s.requiere_reinicio {
        line.push_str(&format!("  [{RESTART_BADGE}]"));
    }
    if !s.descripcion.is_empty() {
        line.push_str(&format!("\n      {}", s.descripcion));
    }
    line
}

/// Entries grouped by category in display order.
pub fn grouped(settings: &[Setting]) -> String {
    let groups = group_by_category(settings);
    if groups.is_empty() {
        return "No hay configuraciones".to_string();
    }
    groups
        .into_iter()
        .map(|(category, entries)| {
            let body = entries.into_iter().map(entry).collect::<Vec<_>>().join("\n");
            format!("{} {category}\n{body}", category_icon(category))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Flat listing, used for a single category.
pub fn flat(settings: &[Setting]) -> String {
    if settings.is_empty() {
        return "No hay configuraciones".to_string();
    }
    settings.iter().map(entry).collect::<Vec<_>>().join("\n")
}
