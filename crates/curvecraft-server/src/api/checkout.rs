use axum::{extract::rejection::JsonRejection, Extension, Json};
use curvecraft_core::{CheckoutError, CheckoutRequest, Order};

use crate::middleware::RequestId;

use super::ApiError;

/// POST /api/checkout — price the cart and issue a stub order.
pub(super) async fn checkout(
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(request_id = %req_id.0, error = %rejection, "checkout body rejected");
        ApiError::from(rejection)
    })?;

    let order = curvecraft_core::checkout(&request).map_err(|e| match e {
        CheckoutError::EmptyCart => ApiError::new("bad_request", "Cart is empty"),
        CheckoutError::AmountOutOfRange => {
            ApiError::new("bad_request", "Cart total is out of range")
        }
    })?;

    tracing::debug!(request_id = %req_id.0, order_id = %order.order_id, "checkout stub order issued");
    Ok(Json(order))
}
