//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use promo_core::raffle::RaffleKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "Back-office and registration console for the TV campaign")]
pub struct Cli {
    /// Campaign API base URL.
    #[arg(long, global = true, env = "PROMO_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session.
    Login {
        email: String,
        #[arg(long, env = "PROMO_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show the stored profile and the sections it can open.
    Whoami,
    /// Register a customer purchase (sellers only).
    Register(RegisterArgs),
    /// Overview: counters, top sellers, heat map and activity.
    Dashboard {
        /// Activity window in days (7 or 30).
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Seller accounts.
    #[command(subcommand)]
    Vendors(VendorsCommand),
    /// Serial inventory.
    #[command(subcommand)]
    Serials(SerialsCommand),
    /// Registered customers and their coupons.
    #[command(subcommand)]
    Clients(ClientsCommand),
    /// Prize draws.
    Raffle {
        #[arg(value_enum)]
        target: RaffleTarget,
        #[command(subcommand)]
        action: Option<RaffleAction>,
    },
    /// Server configuration entries.
    #[command(subcommand)]
    Settings(SettingsCommand),
    /// Time left until the campaign draw.
    Countdown {
        /// Refresh every second until interrupted.
        #[arg(long)]
        watch: bool,
    },
    /// Print the public campaign configuration.
    CampaignConfig,
}

#[derive(Args, Debug, Clone)]
pub struct RegisterArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub ci: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long, default_value = "CI")]
    pub document_type: String,
    #[arg(long)]
    pub issue_place: String,
    /// Serial code as typed. Conflicts with `--scan`.
    #[arg(long, conflicts_with = "scan", required_unless_present = "scan")]
    pub code: Option<String>,
    /// Read the serial code from one line of stdin (barcode scanner).
    #[arg(long)]
    pub scan: bool,
    #[arg(long)]
    pub id_front: Option<PathBuf>,
    #[arg(long)]
    pub id_back: Option<PathBuf>,
    #[arg(long)]
    pub invoice: Option<PathBuf>,
    /// Accept the campaign rules.
    #[arg(long)]
    pub accept_terms: bool,
}

#[derive(Subcommand, Debug)]
pub enum VendorsCommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
    },
    Create {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        ci: String,
        #[arg(long)]
        tienda: String,
        #[arg(long)]
        ciudad: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "PROMO_VENDOR_PASSWORD", hide_env_values = true)]
        password: String,
        /// Create an administrator instead of a seller.
        #[arg(long)]
        admin: bool,
    },
    Deactivate {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum SerialsCommand {
    List {
        /// One-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
        #[arg(long, default_value = "")]
        search: String,
        /// all, available or used.
        #[arg(long, default_value = "all")]
        status: String,
    },
    Stats,
    /// Bulk-load serials from a CSV file.
    Import {
        file: PathBuf,
    },
    /// Download the Excel export.
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ClientsCommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Download uploaded documents of a registration.
    Documents {
        registro_id: i64,
        /// ci_anverso, ci_reverso, nota_venta or all.
        #[arg(long, default_value = "all")]
        kind: String,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaffleTarget {
    Clientes,
    Vendedores,
}

impl From<RaffleTarget> for RaffleKind {
    fn from(target: RaffleTarget) -> Self {
        match target {
            RaffleTarget::Clientes => RaffleKind::Clients,
            RaffleTarget::Vendedores => RaffleKind::Vendors,
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaffleAction {
    /// List winners so far (default).
    Winners,
    /// Draw the next winner.
    Draw,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    List,
    Category {
        categoria: String,
    },
    Set {
        clave: String,
        valor: String,
    },
    TestWhatsapp,
    RefreshCache,
    Stats,
}
