//! Promotes an existing user to the admin role.
//!
//! Usage: `make-admin <email>`

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use teeshop::auth::repo_types::User;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "make_admin=info,teeshop=info".into()),
        )
        .init();

    let email = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: make-admin <email>"))?
        .trim()
        .to_lowercase();

    let database_url = std::env::var("DATABASE_URL")?;
    let db = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await?;

    let user = User::promote_to_admin(&db, &email)
        .await?
        .ok_or_else(|| anyhow::anyhow!("user with email {email} not found"))?;

    info!(user_id = %user.id, email = %user.email, "promoted to admin");
    Ok(())
}
