//! Campaign API paths, relative to the base URL.

use promo_core::raffle::RaffleKind;
use promo_core::registrations::DocumentKind;
use promo_core::types::DbId;

pub const LOGIN: &str = "/api/auth/login";

pub const REGISTER_CLIENT: &str = "/api/registro";

pub const DASHBOARD_SUMMARY: &str = "/api/dashboard/resumen";
pub const DASHBOARD_HEAT_MAP: &str = "/api/dashboard/mapa-calor";

pub const VENDORS_LIST: &str = "/api/admin/vendedores";
pub const VENDOR_CREATE: &str = "/api/admin/vendedor/crear";

pub const SERIALS_LIST: &str = "/api/admin/seriales";
pub const SERIALS_UPLOAD_CSV: &str = "/api/admin/seriales/cargar-csv";
pub const SERIALS_STATS: &str = "/api/admin/seriales/estadisticas";
pub const SERIALS_EXPORT_EXCEL: &str = "/api/admin/seriales/exportar-excel";

pub const CLIENTS_LIST: &str = "/api/admin/clientes-cupones";

pub const SETTINGS_LIST: &str = "/api/admin/configuracion";
pub const SETTINGS_TEST_WHATSAPP: &str = "/api/admin/configuracion/probar-whatsapp";
pub const SETTINGS_REFRESH_CACHE: &str = "/api/admin/configuracion/refrescar-cache";
pub const SETTINGS_STATS: &str = "/api/admin/configuracion/estadisticas";

pub const PUBLIC_CONFIG: &str = "/api/config";

pub fn top_sellers(limit: u32) -> String {
    format!("/api/dashboard/modelos-estrella?limit={limit}")
}

pub fn activity(days: u32) -> String {
    format!("/api/dashboard/ritmo-juego?dias={days}")
}

pub fn vendor_deactivate(id: DbId) -> String {
    format!("/api/admin/vendedor/{id}/desactivar")
}

pub fn paged(path: &str, page: u32, size: u32) -> String {
    format!("{path}?page={page}&size={size}")
}

pub fn registration_document(registro_id: DbId, kind: DocumentKind) -> String {
    format!("/api/registro/{registro_id}/imagen/{}", kind.path_segment())
}

pub fn raffle_draw(kind: RaffleKind) -> String {
    format!("/api/sorteo/{}/realizar", kind.path_segment())
}

pub fn raffle_winners(kind: RaffleKind) -> String {
    format!("/api/sorteo/{}/ganadores", kind.path_segment())
}

pub fn settings_by_category(categoria: &str) -> String {
    format!("/api/admin/configuracion/categoria/{categoria}")
}

pub fn setting_update(clave: &str) -> String {
    format!("/api/admin/configuracion/{clave}")
}
