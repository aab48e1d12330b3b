use clap::Parser;
use lojabot::application::engine::ConversationEngine;
use lojabot::config::EngineConfig;
use lojabot::domain::message::InboundMessage;
use lojabot::domain::ports::{CatalogBox, OutboundBox, PaymentGatewayBox, SessionStoreBox};
use lojabot::infrastructure::console::ConsoleOutbound;
use lojabot::infrastructure::in_memory::{InMemoryCatalog, InMemorySessionStore};
use lojabot::infrastructure::pix::PixGateway;
use lojabot::interfaces::seed;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog seed JSON file (categories + products)
    catalog: PathBuf,

    /// Base URL of the payments API
    #[arg(long, default_value = "https://api.mercadopago.com")]
    gateway_url: String,

    /// Payments API access token
    #[arg(long, env = "MP_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    /// Payer e-mail attached to generated charges
    #[arg(long, default_value = "vendas@lojabot.com.br")]
    payer_email: String,

    /// Store name shown in the menu header and charge descriptions
    #[arg(long, default_value = "LOJABOT")]
    store_name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "lojabot=info".to_string()),
        )
        .init();

    let cli = Cli::parse();

    let file = File::open(&cli.catalog).into_diagnostic()?;
    let seed = seed::read_seed(file).into_diagnostic()?;

    let catalog: CatalogBox = Box::new(InMemoryCatalog::seed(seed.categories, seed.products));
    let sessions: SessionStoreBox = Box::new(InMemorySessionStore::new());
    let gateway: PaymentGatewayBox =
        Box::new(PixGateway::new(cli.gateway_url, cli.access_token).into_diagnostic()?);
    let outbound: OutboundBox = Box::new(ConsoleOutbound);

    let config = EngineConfig {
        store_name: cli.store_name,
        payer_email: cli.payer_email,
        ..EngineConfig::default()
    };
    let engine = ConversationEngine::new(catalog, sessions, gateway, outbound, config);

    // Console transport: each stdin line is a direct message from one user.
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.into_diagnostic()?;
        let msg = InboundMessage::direct("console", line);
        if let Err(e) = engine.handle_message(&msg).await {
            eprintln!("Error handling message: {e}");
        }
    }

    Ok(())
}
