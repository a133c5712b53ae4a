use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::dto::{
    CreateOrderRequest, OrderDetails, OrderPlacedResponse, StatusUpdatedResponse,
    UpdateStatusRequest,
};
use super::repo_types::{Order, OrderStatus};
use crate::{
    auth::extractors::{AdminUser, AuthUser, MaybeAuthUser},
    error::ApiError,
    products::repo_types::Product,
    state::AppState,
};

pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/my/orders", get(my_orders))
        .route("/orders/:id", get(get_order).patch(update_status))
}

#[instrument(skip(state, payload, auth))]
pub async fn create_order(
    State(state): State<AppState>,
    MaybeAuthUser(auth): MaybeAuthUser,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderPlacedResponse>), ApiError> {
    if payload.customer_name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.phone.trim().is_empty()
    {
        warn!("order missing customer fields");
        return Err(ApiError::Validation(
            "Customer name, email and phone are required".into(),
        ));
    }
    if payload.items.is_empty() {
        warn!("order with no items");
        return Err(ApiError::Validation("Order must contain items".into()));
    }

    let user_id = auth.map(|u| u.id);
    let order = Order::create(
        &state.db,
        payload.customer_name.trim(),
        payload.email.trim(),
        payload.phone.trim(),
        payload.address,
        payload.items,
        payload.total_amount,
        user_id,
    )
    .await?;

    info!(order_id = %order.id, total = order.total_amount, guest = user_id.is_none(), "order placed");
    Ok((
        StatusCode::CREATED,
        Json(OrderPlacedResponse {
            message: "Order placed successfully!".into(),
            order,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderDetails>, ApiError> {
    let order = Order::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Order not found".into()))?;

    // Expand line items against the current catalog for display
    let mut product_ids: Vec<Uuid> = order.items.0.iter().map(|i| i.product_id).collect();
    product_ids.sort_unstable();
    product_ids.dedup();
    let products = if product_ids.is_empty() {
        Vec::new()
    } else {
        Product::find_by_ids(&state.db, &product_ids).await?
    };

    Ok(Json(OrderDetails::expand(order, products)))
}

#[instrument(skip(state, auth))]
pub async fn my_orders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = Order::list_by_user(&state.db, auth.id).await?;
    Ok(Json(orders))
}

#[instrument(skip(state, _admin))]
pub async fn list_orders(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = Order::list_all(&state.db).await?;
    Ok(Json(orders))
}

#[instrument(skip(state, admin, payload))]
pub async fn update_status(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<StatusUpdatedResponse>, ApiError> {
    let status = OrderStatus::from_str(&payload.status).map_err(|_| {
        warn!(status = %payload.status, "invalid status value");
        ApiError::Validation("Invalid order status".into())
    })?;

    let order = Order::update_status(&state.db, id, status)
        .await?
        .ok_or_else(|| ApiError::NotFound("Order not found".into()))?;

    info!(order_id = %order.id, status = %status, admin_id = %admin.0.id, "order status updated");
    Ok(Json(StatusUpdatedResponse {
        message: "Order status updated".into(),
        order,
    }))
}
