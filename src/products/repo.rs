use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{NewProduct, Product};

impl Product {
    /// Full catalog, featured entries first, then newest.
    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, category, image, sizes, colors,
                   stock, featured, created_at
            FROM products
            ORDER BY featured DESC, created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Product>> {
        let row = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, category, image, sizes, colors,
                   stock, featured, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Batch lookup used when expanding order line items for display.
    pub async fn find_by_ids(db: &PgPool, ids: &[Uuid]) -> anyhow::Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, category, image, sizes, colors,
                   stock, featured, created_at
            FROM products
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids.to_vec())
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn insert(db: &PgPool, p: &NewProduct) -> anyhow::Result<Product> {
        let row = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, category, image, sizes,
                                  colors, stock, featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, description, price, category, image, sizes, colors,
                      stock, featured, created_at
            "#,
        )
        .bind(p.name)
        .bind(p.description)
        .bind(p.price)
        .bind(p.category)
        .bind(p.image)
        .bind(p.sizes.iter().map(|s| s.to_string()).collect::<Vec<_>>())
        .bind(p.colors.iter().map(|s| s.to_string()).collect::<Vec<_>>())
        .bind(p.stock)
        .bind(p.featured)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Used by the seeder before reinserting the stock catalog.
    pub async fn delete_all(db: &PgPool) -> anyhow::Result<u64> {
        let res = sqlx::query("DELETE FROM products").execute(db).await?;
        Ok(res.rows_affected())
    }
}
