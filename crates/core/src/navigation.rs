//! Role-gated back-office navigation.

use crate::error::CoreError;
use crate::roles::Role;

pub const MSG_ADMIN_ONLY: &str = "Acceso restringido a administradores";

/// Sections of the back-office dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Serials,
    VendorRegistration,
    Players,
    Settings,
    Raffle,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::Serials,
        Section::VendorRegistration,
        Section::Players,
        Section::Settings,
        Section::Raffle,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Overview => "tablero",
            Section::Serials => "seriales",
            Section::VendorRegistration => "registro",
            Section::Players => "jugadores",
            Section::Settings => "ajustes",
            Section::Raffle => "sorteo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "📊 Tablero",
            Section::Serials => "🔢 Seriales",
            Section::VendorRegistration => "📝 Registro Vendedores",
            Section::Players => "👥 Jugadores",
            Section::Settings => "⚙️ Ajustes",
            Section::Raffle => "🏆 Copa (Sorteo)",
        }
    }

    pub fn allows(&self, role: &Role) -> bool {
        match self {
            Section::Overview => matches!(role, Role::Admin | Role::Vendor),
            _ => *role == Role::Admin,
        }
    }
}

/// Sections shown in the menu for `role`.
pub fn visible_sections(role: &Role) -> Vec<Section> {
    Section::ALL.into_iter().filter(|s| s.allows(role)).collect()
}

/// Refuse access to a section the role cannot see.
pub fn ensure_access(role: &Role, section: Section) -> Result<(), CoreError> {
    if section.allows(role) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(MSG_ADMIN_ONLY.to_string()))
    }
}

/// The first view shown after logging in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingView {
    Dashboard,
    Registration,
}

pub fn landing_view(role: &Role) -> LandingView {
    match role {
        Role::Admin => LandingView::Dashboard,
        _ => LandingView::Registration,
    }
}
