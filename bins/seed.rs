//! Load the sample restaurants, pizzas and menu entries.
//!
//! Usage: `seed [--reset]`. Without `--reset` an already populated database
//! is left alone.
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let reset = std::env::args().skip(1).any(|a| a == "--reset");
    let cfg = configs::AppConfig::load_or_env()?;
    let db = models::db::connect_with_config(&cfg.database).await?;

    let summary = service::seed::seed_sample_data(&db, reset).await?;
    if summary.skipped {
        info!("restaurants already present; pass --reset to reseed");
    } else {
        info!(
            restaurants = summary.restaurants,
            pizzas = summary.pizzas,
            restaurant_pizzas = summary.restaurant_pizzas,
            "seed complete"
        );
    }
    db.close().await?;
    Ok(())
}
