//! Checkout CLI
//!
//! Drives the payment orchestrator from the command line against an HTTP
//! gateway, or in dry-run mode where records are only logged.

mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;

use checkout_engine::PaymentOrchestrator;
use checkout_gateway::{HttpGateway, LogAnalytics, LogNotifier, TracingGateway};
use checkout_types::{
    AnalyticsSink, GatewayPayload, Metadata, NotificationSink, OrchestratorConfig, PaymentError,
    PaymentGateway, PaymentRequest, RefundRequest,
};

#[derive(Parser)]
#[command(name = "checkout")]
#[command(author, version, about = "Payment orchestrator CLI", long_about = None)]
struct Cli {
    /// Base URL of the payment gateway
    #[arg(long, env = "CHECKOUT_GATEWAY_URL")]
    gateway_url: Option<String>,

    /// API key sent to the gateway
    #[arg(long, env = "CHECKOUT_GATEWAY_API_KEY")]
    api_key: Option<String>,

    /// Log records instead of sending them
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a payment
    Pay {
        #[arg(long)]
        amount: f64,
        #[arg(long, default_value = "USD")]
        currency: String,
        #[arg(long)]
        user: String,
        /// Payment method (credit_card, paypal)
        #[arg(long)]
        method: String,
        /// Metadata entry as key=value (repeatable)
        #[arg(long = "meta", value_parser = parse_key_value)]
        metadata: Vec<(String, String)>,
        #[arg(long)]
        discount: Option<String>,
        /// Fraud level (0 skips the check)
        #[arg(long, default_value_t = 0)]
        fraud_level: i32,
    },
    /// Refund a payment
    Refund {
        /// Transaction being refunded
        #[arg(long)]
        transaction: String,
        #[arg(long)]
        user: String,
        #[arg(long)]
        reason: String,
        #[arg(long)]
        amount: f64,
        #[arg(long, default_value = "USD")]
        currency: String,
        /// Metadata entry as key=value (repeatable)
        #[arg(long = "meta", value_parser = parse_key_value)]
        metadata: Vec<(String, String)>,
    },
}

fn parse_key_value(s: &str) -> Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Expected key=value, got: {}", s))?;
    Ok((key.trim().to_string(), value.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,checkout_engine=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::from_env()?;

    match (cli.dry_run, cli.gateway_url) {
        (false, Some(url)) => {
            tracing::info!(gateway = %url, "sending records to gateway");
            let mut gateway = HttpGateway::new(url);
            if let Some(key) = cli.api_key {
                gateway = gateway.with_api_key(key);
            }
            run(config, gateway, cli.command).await
        }
        (true, _) => {
            tracing::info!("dry run: records will only be logged");
            run(config, TracingGateway, cli.command).await
        }
        (false, None) => {
            anyhow::bail!(
                "No gateway configured: pass --gateway-url (or CHECKOUT_GATEWAY_URL) or --dry-run"
            )
        }
    }
}

async fn run<G: PaymentGateway>(
    config: OrchestratorConfig,
    gateway: G,
    command: Commands,
) -> Result<()> {
    let (reports, mut failures) = mpsc::unbounded_channel();
    let orchestrator = PaymentOrchestrator::new(config, gateway, LogNotifier, LogAnalytics)?
        .with_failure_reports(reports);

    let result = execute(&orchestrator, command).await;

    drop(orchestrator);
    while let Some(failure) = failures.recv().await {
        eprintln!(
            "warning: {} failed for {}: {}",
            failure.effect, failure.user_id, failure.error
        );
    }

    match result {
        Ok(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Err(err) => {
            if let Some(record) = err.dispatched_record() {
                eprintln!(
                    "record was built but not confirmed by the gateway:\n{}",
                    serde_json::to_string_pretty(record)?
                );
            }
            Err(err.into())
        }
    }
}

async fn execute<G, N, A>(
    orchestrator: &PaymentOrchestrator<G, N, A>,
    command: Commands,
) -> Result<GatewayPayload, PaymentError>
where
    G: PaymentGateway,
    N: NotificationSink,
    A: AnalyticsSink,
{
    let record = match command {
        Commands::Pay {
            amount,
            currency,
            user,
            method,
            metadata,
            discount,
            fraud_level,
        } => {
            let req = PaymentRequest {
                amount,
                currency,
                user_id: user,
                method,
                metadata: metadata.into_iter().collect::<Metadata>(),
                discount_code: discount,
                fraud_level,
            };
            GatewayPayload::Transaction(orchestrator.process_payment(req).await?)
        }
        Commands::Refund {
            transaction,
            user,
            reason,
            amount,
            currency,
            metadata,
        } => {
            let req = RefundRequest {
                transaction_id: transaction,
                user_id: user,
                reason,
                amount,
                currency,
                metadata: metadata.into_iter().collect::<Metadata>(),
            };
            GatewayPayload::Refund(orchestrator.refund_payment(req).await?)
        }
    };

    Ok(record)
}
