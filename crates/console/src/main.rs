use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use promo_console::cli::Cli;
use promo_console::commands::{self, Context};
use promo_console::config::ConsoleConfig;
use promo_console::views::dialog;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing (stderr keeps stdout for command output) ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promo_console=info,promo_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("{}", dialog::error(&promo_console::error_message(&err)));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ConsoleConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    tracing::debug!(api_url = %config.api_url, "Loaded console configuration");

    let ctx = Context::new(config)?;
    let output = commands::run(&ctx, cli.command).await?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
