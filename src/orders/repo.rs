use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{Order, OrderItem, OrderStatus, CASH_ON_DELIVERY};
use crate::auth::repo_types::Address;

impl Order {
    /// Persist a new order. Items and total are stored verbatim from the
    /// caller; status starts at `Pending` via the column default.
    pub async fn create(
        db: &PgPool,
        customer_name: &str,
        email: &str,
        phone: &str,
        address: Address,
        items: Vec<OrderItem>,
        total_amount: i64,
        user_id: Option<Uuid>,
    ) -> anyhow::Result<Order> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (customer_name, email, phone, address, items,
                                total_amount, payment_method, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, customer_name, email, phone, address, items,
                      total_amount, payment_method, status, user_id, order_date
            "#,
        )
        .bind(customer_name)
        .bind(email)
        .bind(phone)
        .bind(Json(address))
        .bind(Json(items))
        .bind(total_amount)
        .bind(CASH_ON_DELIVERY)
        .bind(user_id)
        .fetch_one(db)
        .await?;
        Ok(order)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_name, email, phone, address, items,
                   total_amount, payment_method, status, user_id, order_date
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(order)
    }

    /// The owning user's orders, newest first.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_name, email, phone, address, items,
                   total_amount, payment_method, status, user_id, order_date
            FROM orders
            WHERE user_id = $1
            ORDER BY order_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(orders)
    }

    /// Every order in the store, newest first. Admin listing.
    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_name, email, phone, address, items,
                   total_amount, payment_method, status, user_id, order_date
            FROM orders
            ORDER BY order_date DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(orders)
    }

    /// Set the status field, leaving everything else untouched. Returns the
    /// updated row, or `None` when the order does not exist.
    pub async fn update_status(
        db: &PgPool,
        id: Uuid,
        status: OrderStatus,
    ) -> anyhow::Result<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET status = $1
            WHERE id = $2
            RETURNING id, customer_name, email, phone, address, items,
                      total_amount, payment_method, status, user_id, order_date
            "#,
        )
        .bind(status)
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(order)
    }
}
