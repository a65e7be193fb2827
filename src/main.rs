use order_core::config::Config;
use order_core::persistence::{PgOrderStore, create_pool_and_migrate};
use order_core::types::status::OrderStatus;
use order_core::types::view::{MonthlyProfit, OrderSummary};
use order_core::{OrderError, OrderService};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: order-report [profit | orders [STATUS]]";

#[derive(Serialize)]
#[serde(untagged)]
enum Report {
    Profit(Vec<MonthlyProfit>),
    Orders(Vec<OrderSummary>),
}

async fn run(args: &[String]) -> Result<Report, OrderError> {
    let config = Config::from_env()?;
    let pool = create_pool_and_migrate(&config).await?;
    let service = OrderService::new(PgOrderStore::new(pool));

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["profit"] => Ok(Report::Profit(service.monthly_profit().await?)),
        ["orders"] => Ok(Report::Orders(service.list_orders().await?)),
        ["orders", status] => {
            let status = OrderStatus::parse(status)?;
            Ok(Report::Orders(service.list_orders_by_status(status).await?))
        }
        _ => Err(OrderError::InvalidRequest(USAGE.to_string())),
    }
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let report = match run(&args).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "order report failed");
            std::process::exit(if e.is_client_error() { 2 } else { 1 });
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!(error = %e, "cannot encode order report");
            std::process::exit(1);
        }
    }
}
