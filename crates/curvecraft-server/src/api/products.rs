use axum::{
    extract::{Path, State},
    Extension, Json,
};
use curvecraft_core::{Product, ProductListing};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct ProductListResponse {
    products: Vec<ProductListing>,
}

#[derive(Debug, Serialize)]
pub(super) struct ProductDetailResponse {
    product: Product,
}

/// GET /api/products — lean listing of the whole catalog.
pub(super) async fn list_products(State(state): State<AppState>) -> Json<ProductListResponse> {
    Json(ProductListResponse {
        products: state.catalog.listings(),
    })
}

/// GET /api/products/{slug} — full product record.
pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ProductDetailResponse>, ApiError> {
    let product = state.catalog.find_by_slug(&slug).ok_or_else(|| {
        tracing::debug!(request_id = %req_id.0, %slug, "product lookup missed");
        ApiError::new("not_found", "Product not found")
    })?;

    Ok(Json(ProductDetailResponse {
        product: product.clone(),
    }))
}
