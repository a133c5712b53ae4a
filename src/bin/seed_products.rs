//! Wipes the catalog and reloads the stock t-shirt entries.
//!
//! Usage: `seed-products` (reads DATABASE_URL from the environment or .env)

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use teeshop::products::repo_types::Product;
use teeshop::products::seed::stock_catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "seed_products=info,teeshop=info".into()),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL")?;
    let db = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&db).await?;

    let removed = Product::delete_all(&db).await?;
    info!(removed, "cleared existing products");

    let catalog = stock_catalog();
    let total = catalog.len();
    for entry in &catalog {
        let product = Product::insert(&db, entry).await?;
        info!(name = %product.name, price = product.price, category = %product.category, "seeded");
    }

    info!(total, "catalog seeded");
    Ok(())
}
