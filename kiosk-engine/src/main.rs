//! Scripted demo session
//!
//! Exercises the engine end to end: guest login, one detection window,
//! a manual scan, an assistant query, then checkout. Useful as a smoke
//! run; the real display layer drives the same operations.

use std::time::Duration;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use kiosk_engine::payment::PaymentMethod;
use kiosk_engine::{Catalog, Config, SessionController};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let detection_window = Duration::from_secs(config.detection_interval_secs + 1);
    let mut session = SessionController::new(Catalog::load(), config);

    session.login_guest();
    tracing::info!("waiting one detection window");
    tokio::time::sleep(detection_window).await;

    if let Some(line) = session.simulate_scan() {
        tracing::info!(name = %line.item.name, "manual scan");
    }

    let reply = session.send_chat("I want to make spaghetti");
    tracing::info!(reply = %reply.text, "assistant");
    for ingredient in &reply.ingredients {
        match &ingredient.item {
            Some(item) => {
                tracing::info!(ingredient = %ingredient.name, aisle = %item.aisle, "in stock")
            }
            None => tracing::info!(ingredient = %ingredient.name, "not in stock"),
        }
    }

    let summary = session.cart_summary();
    tracing::info!(
        lines = summary.lines,
        units = summary.units,
        total = %kiosk_engine::cart::money::format_rm(summary.total),
        "cart before checkout"
    );

    session.proceed_to_payment()?;
    let record = session.confirm_payment(PaymentMethod::Cash)?;
    tracing::info!(transaction_id = %record.transaction_id, "paid");
    println!("{}", record.to_qr_payload()?);

    session.exit_after_payment();
    session.shutdown().await;
    Ok(())
}
