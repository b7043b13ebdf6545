//! Customer registrations (players) and their coupons, as listed by
//! `/api/admin/clientes-cupones`.

use serde::{Deserialize, Serialize};

use crate::filter::Searchable;
use crate::types::DbId;

/// Page sizes offered by the player table.
pub const CLIENT_PAGE_SIZES: &[u32] = &[10, 25, 50, 100];

pub const CLIENTS_EMPTY_FILTERED: &str = "No se encontraron jugadores";
pub const CLIENTS_EMPTY: &str = "Sin registros en la tabla";

/// Coupon status meaning "still in the drum".
pub const COUPON_ACTIVE: &str = "ACTIVO";

/// A raffle entry generated by a qualifying registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: DbId,
    pub codigo: String,
    pub estado: String,
    #[serde(default)]
    pub fecha_generacion: Option<String>,
    #[serde(default)]
    pub fecha_sorteo: Option<String>,
}

impl Coupon {
    pub fn is_active(&self) -> bool {
        self.estado == COUPON_ACTIVE
    }
}

/// One customer registration with its coupons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub registro_id: DbId,
    #[serde(default)]
    pub nombre_cliente: Option<String>,
    #[serde(default)]
    pub ci: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub serial_tv: Option<String>,
    #[serde(default)]
    pub modelo_tv: Option<String>,
    #[serde(default)]
    pub tamano_tv: u32,
    #[serde(default)]
    pub cantidad_cupones: u32,
    #[serde(default)]
    pub cupones: Vec<Coupon>,
    #[serde(default)]
    pub fecha_registro: Option<String>,
    #[serde(default)]
    pub nombre_vendedor: Option<String>,
}

impl Searchable for ClientRecord {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.nombre_cliente.as_deref(),
            self.ci.as_deref(),
            self.serial_tv.as_deref(),
            self.modelo_tv.as_deref(),
        ]
    }
}

/// Documents attached to a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    IdFront,
    IdBack,
    SalesNote,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::IdFront,
        DocumentKind::IdBack,
        DocumentKind::SalesNote,
    ];

    /// Path segment used by `/api/registro/{id}/imagen/{tipo}`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            DocumentKind::IdFront => "ci_anverso",
            DocumentKind::IdBack => "ci_reverso",
            DocumentKind::SalesNote => "nota_venta",
        }
    }

    /// Default file name for a downloaded document.
    pub fn file_name(&self, registro_id: DbId) -> String {
        format!("{}_{registro_id}.jpg", self.path_segment())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.path_segment() == s)
            .ok_or_else(|| format!("unknown document type '{s}'"))
    }
}
