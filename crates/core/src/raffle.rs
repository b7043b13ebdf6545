//! Raffle ("sorteo") display rules.
//!
//! The draw itself runs server-side. The client only knows how many
//! winners each raffle awards and how to present them.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Cities tracked in the vendor raffle distribution.
pub const RAFFLE_CITIES: [&str; 3] = ["La Paz", "Cochabamba", "Santa Cruz"];

pub const MSG_DRAW_FAILED: &str = "Error al realizar sorteo";

/// Which raffle to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaffleKind {
    Clients,
    Vendors,
}

impl RaffleKind {
    /// Path segment under `/api/sorteo/`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            RaffleKind::Clients => "clientes",
            RaffleKind::Vendors => "vendedores",
        }
    }

    /// Number of winners that completes this raffle.
    pub fn winner_target(&self) -> usize {
        match self {
            RaffleKind::Clients => 5,
            RaffleKind::Vendors => 6,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RaffleKind::Clients => "Sorteo Clientes (5 Ganadores)",
            RaffleKind::Vendors => "Sorteo Vendedores (6 Ganadores)",
        }
    }

    pub fn is_complete(&self, winners: usize) -> bool {
        winners >= self.winner_target()
    }

    /// Refuse a draw once every prize has been awarded.
    pub fn ensure_can_draw(&self, winners: usize) -> Result<(), CoreError> {
        if self.is_complete(winners) {
            Err(CoreError::Validation(format!(
                "✅ Sorteo Completo: ya hay {winners} / {} ganadores",
                self.winner_target()
            )))
        } else {
            Ok(())
        }
    }

    /// `{n} / {target} Ganadores` progress label.
    pub fn progress_label(&self, winners: usize) -> String {
        format!("{winners} / {} Ganadores", self.winner_target())
    }
}

/// Winning coupon from `/api/sorteo/clientes/ganadores`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponWinner {
    pub codigo_cupon: String,
    #[serde(default)]
    pub nombre_cliente: String,
    #[serde(default)]
    pub ci_cliente: String,
    pub posicion: u32,
    #[serde(default)]
    pub fecha_sorteo: Option<String>,
}

/// Winning seller from `/api/sorteo/vendedores/ganadores`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorWinner {
    #[serde(default)]
    pub nombre_vendedor: String,
    #[serde(default)]
    pub ci_vendedor: String,
    #[serde(default)]
    pub tienda: String,
    #[serde(default)]
    pub ciudad: String,
    #[serde(default)]
    pub cantidad_ventas: u64,
    pub posicion: u32,
    #[serde(default)]
    pub fecha_sorteo: Option<String>,
}

/// Winners per tracked city. Cities outside [`RAFFLE_CITIES`] are ignored.
pub fn city_distribution(winners: &[VendorWinner]) -> [(&'static str, usize); 3] {
    RAFFLE_CITIES.map(|city| (city, winners.iter().filter(|w| w.ciudad == city).count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(ciudad: &str, posicion: u32) -> VendorWinner {
        VendorWinner {
            nombre_vendedor: "V".to_string(),
            ci_vendedor: "1".to_string(),
            tienda: "T".to_string(),
            ciudad: ciudad.to_string(),
            cantidad_ventas: 3,
            posicion,
            fecha_sorteo: None,
        }
    }

    #[test]
    fn completion_thresholds() {
        assert!(!RaffleKind::Clients.is_complete(4));
        assert!(RaffleKind::Clients.is_complete(5));
        assert!(!RaffleKind::Vendors.is_complete(5));
        assert!(RaffleKind::Vendors.is_complete(6));
    }

    #[test]
    fn draw_refused_when_complete() {
        assert!(RaffleKind::Clients.ensure_can_draw(2).is_ok());
        assert!(RaffleKind::Clients.ensure_can_draw(5).is_err());
    }

    #[test]
    fn distribution_counts_known_cities() {
        let winners = vec![
            vendor("La Paz", 1),
            vendor("Santa Cruz", 2),
            vendor("La Paz", 3),
            vendor("Tarija", 4),
        ];
        assert_eq!(
            city_distribution(&winners),
            [("La Paz", 2), ("Cochabamba", 0), ("Santa Cruz", 1)]
        );
    }

    #[test]
    fn coupon_winner_reads_row() {
        let w: CouponWinner = serde_json::from_str(
            r#"{"codigoCupon":"CUP-9","nombreCliente":"Carla","ciCliente":"77","posicion":1}"#,
        )
        .unwrap();
        assert_eq!(w.posicion, 1);
        assert!(w.fecha_sorteo.is_none());
    }

    #[test]
    fn progress_label() {
        assert_eq!(RaffleKind::Vendors.progress_label(2), "2 / 6 Ganadores");
    }
}
