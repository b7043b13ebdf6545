//! Dashboard overview records and chart shaping.
//!
//! The four panels (summary counters, top sellers, heat map, activity) are
//! fetched independently; each falls back to its own empty default.

use serde::{Deserialize, Serialize};

use crate::activity::{ActivityWindow, DailyCount};

/// Number of sellers requested for the top-seller ranking.
pub const TOP_SELLER_LIMIT: u32 = 10;

pub const MSG_NO_DATA: &str = "No hay datos disponibles";
pub const MSG_HEAT_MAP_EMPTY: &str = "Generando territorio...";

/// Counters from `/api/dashboard/resumen`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Summary {
    pub jugadores_inscritos: u64,
    pub series_canjeadas: u64,
    pub seriales_disponibles: u64,
}

impl Summary {
    /// `(label, value)` cards in display order.
    pub fn cards(&self) -> [(&'static str, u64); 3] {
        [
            ("Jugadores Inscritos", self.jugadores_inscritos),
            ("Cupones Emitidos", self.series_canjeadas),
            ("Seriales Disponibles", self.seriales_disponibles),
        ]
    }
}

/// One row of `/api/dashboard/modelos-estrella`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopSeller {
    pub nombre_vendedor: String,
    pub tienda: String,
    pub ciudad: String,
    pub cantidad_ventas: u64,
}

/// One row of `/api/dashboard/mapa-calor`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeatZone {
    pub departamento: String,
    pub cantidad_ventas: u64,
}

/// Bar widths (percent of the widest zone) for the heat map. The
/// denominator is floored at one so an all-zero map renders empty bars.
pub fn heat_widths(zones: &[HeatZone]) -> Vec<f64> {
    let max = zones.iter().map(|z| z.cantidad_ventas).max().unwrap_or(0).max(1);
    zones
        .iter()
        .map(|z| z.cantidad_ventas as f64 / max as f64 * 100.0)
        .collect()
}

/// Everything the overview renders. Each field is filled independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub summary: Summary,
    pub top_sellers: Vec<TopSeller>,
    pub heat_map: Vec<HeatZone>,
    pub activity: Vec<DailyCount>,
    pub window: ActivityWindow,
}
