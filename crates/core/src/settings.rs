//! Server configuration entries edited from the back-office.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Categories rendered by the settings page, in display order.
pub const SETTING_CATEGORIES: &[&str] = &["WHATSAPP", "GEMINI", "EMAIL", "JWT", "SERVER"];

pub const MSG_SETTING_UPDATED: &str = "Configuración actualizada correctamente";
pub const MSG_SETTING_UPDATE_FAILED: &str = "Error al actualizar configuración";
pub const MSG_WHATSAPP_OK: &str = "✅ WhatsApp configurado correctamente";
pub const MSG_WHATSAPP_DISABLED: &str = "WhatsApp no está habilitado";
pub const MSG_WHATSAPP_TEST_FAILED: &str = "Error al probar WhatsApp";
pub const MSG_CACHE_REFRESHED: &str = "✅ Cache refrescado exitosamente";
pub const MSG_CACHE_REFRESH_FAILED: &str = "Error al refrescar cache";

/// One configuration entry from `/api/admin/configuracion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub id: DbId,
    pub clave: String,
    #[serde(default)]
    pub valor: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub requiere_reinicio: bool,
}

/// Body of `PUT /api/admin/configuracion/{clave}`.
#[derive(Debug, Clone, Serialize)]
pub struct SettingUpdate<'a> {
    pub valor: &'a str,
}

/// `data` of `POST /api/admin/configuracion/probar-whatsapp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WhatsAppCheck {
    pub habilitado: bool,
    pub mensaje: Option<String>,
}

impl WhatsAppCheck {
    /// Success text, or the reason WhatsApp is not usable.
    pub fn outcome(&self) -> Result<&'static str, String> {
        if self.habilitado {
            Ok(MSG_WHATSAPP_OK)
        } else {
            Err(self
                .mensaje
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| MSG_WHATSAPP_DISABLED.to_string()))
        }
    }
}

/// Group entries by category in [`SETTING_CATEGORIES`] order. Categories
/// without entries, and entries outside the known categories, are left out.
pub fn group_by_category(settings: &[Setting]) -> Vec<(&'static str, Vec<&Setting>)> {
    SETTING_CATEGORIES
        .iter()
        .map(|category| {
            let entries: Vec<&Setting> = settings
                .iter()
                .filter(|s| s.categoria == *category)
                .collect();
            (*category, entries)
        })
        .filter(|(_, entries)| !entries.is_empty())
        .collect()
}

/// Whether saving `clave` should be followed by a WhatsApp connectivity test.
pub fn triggers_whatsapp_test(clave: &str) -> bool {
    clave.to_lowercase().contains("whatsapp")
}

pub fn category_icon(category: &str) -> &'static str {
    match category {
        "WHATSAPP" => "💬",
        "GEMINI" => "🤖",
        "EMAIL" => "📧",
        "JWT" => "🔐",
        "SERVER" => "⚙️",
        _ => "📋",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setting(id: DbId, clave: &str, categoria: &str) -> Setting {
        Setting {
            id,
            clave: clave.to_string(),
            valor: "v".to_string(),
            descripcion: String::new(),
            categoria: categoria.to_string(),
            requiere_reinicio: false,
        }
    }

    #[test]
    fn groups_in_fixed_order() {
        let settings = vec![
            setting(1, "server.port", "SERVER"),
            setting(2, "whatsapp.token", "WHATSAPP"),
            setting(3, "misc.flag", "OTHER"),
            setting(4, "whatsapp.phone", "WHATSAPP"),
        ];
        let groups = group_by_category(&settings);
        let names: Vec<&str> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(names, vec!["WHATSAPP", "SERVER"]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[1].clave, "whatsapp.phone");
    }

    #[test]
    fn whatsapp_keys_trigger_test() {
        assert!(triggers_whatsapp_test("whatsapp.api.token"));
        assert!(triggers_whatsapp_test("WHATSAPP_TOKEN"));
        assert!(!triggers_whatsapp_test("email.host"));
    }

    #[test]
    fn whatsapp_check_outcomes() {
        let ok = WhatsAppCheck {
            habilitado: true,
            mensaje: None,
        };
        assert_eq!(ok.outcome(), Ok(MSG_WHATSAPP_OK));

        let off: WhatsAppCheck = serde_json::from_str(r#"{"habilitado":false}"#).unwrap();
        assert_eq!(off.outcome(), Err(MSG_WHATSAPP_DISABLED.to_string()));

        let reason: WhatsAppCheck =
            serde_json::from_str(r#"{"habilitado":false,"mensaje":"Token vencido"}"#).unwrap();
        assert_eq!(reason.outcome(), Err("Token vencido".to_string()));
    }

    #[test]
    fn setting_reads_restart_flag() {
        let s: Setting = serde_json::from_str(
            r#"{"id":1,"clave":"jwt.secret","valor":"x","descripcion":"d","categoria":"JWT","requiereReinicio":true}"#,
        )
        .unwrap();
        assert!(s.requiere_reinicio);
        assert_eq!(category_icon(&s.categoria), "🔐");
    }
}
