//! Text renderings of each screen. Views only format; commands fetch.

pub mod dashboard;
pub mod dialog;
pub mod lists;
pub mod raffle;
pub mod settings;
pub mod table;

use promo_core::countdown::TimeLeft;
use promo_core::navigation::Section;

pub fn countdown(left: &TimeLeft) -> String {
    if left.is_zero() {
        "¡Llegó el día del sorteo!".to_string()
    } else {
        format!("Faltan {left} para el sorteo")
    }
}

pub fn menu(sections: &[Section]) -> String {
    if sections.is_empty() {
        return "Sin secciones disponibles para este rol".to_string();
    }
    sections
        .iter()
        .map(|s| format!("  {:<10} {}", s.id(), s.label()))
        .collect::<Vec<_>>()
        .join("\n")
}
