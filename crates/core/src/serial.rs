//! Serial-number inventory records.

use serde::{Deserialize, Serialize};

use crate::filter::Searchable;
use crate::types::DbId;

/// Page sizes offered by the serial inventory table.
pub const SERIAL_PAGE_SIZES: &[u32] = &[10, 25, 50, 100, 500];

/// Empty-table text when a filter term is active.
pub const SERIALS_EMPTY_FILTERED: &str = "No se encontraron resultados";

/// Empty-table text when no filter is active.
pub const SERIALS_EMPTY: &str = "No se documentaron códigos";

pub const MSG_CSV_UPLOADED: &str = "Seriales cargados exitosamente";
pub const MSG_CSV_UPLOAD_FAILED: &str = "Error al cargar el CSV";
pub const MSG_EXCEL_EXPORTED: &str = "Excel exportado exitosamente";
pub const MSG_EXCEL_EXPORT_FAILED: &str = "Error al exportar Excel";

/// Default file name for the Excel export taken on `date`.
pub fn export_file_name(date: chrono::NaiveDate) -> String {
    format!("seriales_{}.xlsx", date.format("%Y-%m-%d"))
}

/// One eligible purchased unit. Consumed server-side by a registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Serial {
    pub id: DbId,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub tv_model: Option<String>,
    #[serde(default)]
    pub inches: u32,
    #[serde(default)]
    pub ticket_multiplier: u32,
    #[serde(default)]
    pub usado: bool,
    #[serde(default)]
    pub fecha_uso: Option<String>,
    #[serde(default)]
    pub registro: Option<serde_json::Value>,
}

impl Serial {
    /// Status badge text.
    pub fn status_label(&self) -> &'static str {
        if self.usado {
            "USADO"
        } else {
            "LIBRE"
        }
    }
}

impl Searchable for Serial {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![self.code.as_deref(), self.tv_model.as_deref()]
    }
}

/// Inventory counters from `/api/admin/seriales/estadisticas`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialStats {
    pub disponibles: u64,
    pub usados: u64,
    pub total: u64,
}

/// Status filter applied on top of the text filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SerialFilter {
    #[default]
    All,
    Available,
    Used,
}

impl SerialFilter {
    pub fn accepts(&self, serial: &Serial) -> bool {
        match self {
            SerialFilter::All => true,
            SerialFilter::Available => !serial.usado,
            SerialFilter::Used => serial.usado,
        }
    }
}

impl std::str::FromStr for SerialFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(SerialFilter::All),
            "available" => Ok(SerialFilter::Available),
            "used" => Ok(SerialFilter::Used),
            other => Err(format!("unknown serial filter '{other}' (expected all, available or used)")),
        }
    }
}

/// Apply the text and status filters to one fetched page.
pub fn filter_serials<'a>(serials: &'a [Serial], term: &str, status: SerialFilter) -> Vec<&'a Serial> {
    crate::filter::filter_items(serials, term)
        .into_iter()
        .filter(|serial| status.accepts(serial))
        .collect()
}
