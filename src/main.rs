use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_gateway::application::service::PaymentService;
use payment_gateway::domain::ports::{BankGatewayBox, PaymentStoreBox};
use payment_gateway::infrastructure::bank_client::HttpBankClient;
use payment_gateway::infrastructure::in_memory::InMemoryPaymentStore;
use payment_gateway::interfaces::http::api;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to serve the gateway API on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8090")]
    bind: SocketAddr,

    /// Base URL of the bank simulator
    #[arg(long, env = "BANK_SIMULATOR_URL", default_value = "http://localhost:8080")]
    bank_url: String,

    /// Timeout for bank authorization calls, in seconds
    #[arg(long, default_value_t = 5)]
    bank_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let bank: BankGatewayBox = Box::new(
        HttpBankClient::new(cli.bank_url, Duration::from_secs(cli.bank_timeout_secs))
            .into_diagnostic()?,
    );
    let store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    let service = Arc::new(PaymentService::new(bank, store));

    let listener = tokio::net::TcpListener::bind(cli.bind).await.into_diagnostic()?;
    tracing::info!("Payment gateway listening on {}", cli.bind);
    axum::serve(listener, api::router(service))
        .await
        .into_diagnostic()?;

    Ok(())
}
