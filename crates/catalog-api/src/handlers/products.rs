//! Product CRUD handlers.
//!
//! Each handler orchestrates validation and the product repository, then
//! maps the outcome to a status code and JSON body. The id always travels
//! as a query parameter. Name uniqueness is a separate read before the
//! write; two concurrent writers with the same name can both pass it, in
//! which case the second write simply lands (there is no store constraint
//! to stop it).

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::{validate::validate_product_with_limit, ProductId};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::{error::ApiError, AppState};

/// Optional product id, carried as a raw string so a malformed value
/// reaches the store layer instead of being rejected at routing time.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    /// Product id in query-string form.
    pub id: Option<String>,
}

/// `GET /products` - list every product, or fetch one by `id`.
///
/// With `?id=` present returns the single matching product or 404. Without
/// it returns the full catalog as an array, in storage order.
#[instrument(name = "get_products", skip(state, params), fields(id = params.id.as_deref()))]
pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> Result<Response, ApiError> {
    let Some(raw_id) = params.id else {
        let products = state.storage.products.find_all().await?;
        return Ok(Json(products).into_response());
    };

    let id: ProductId = raw_id.parse()?;
    let product = state.storage.products.find_by_id(id).await?.ok_or(ApiError::NotFound)?;

    Ok(Json(product).into_response())
}

/// `POST /products` - create a product.
///
/// Validates the payload, rejects duplicate names, inserts, and returns
/// the created row (with its store-assigned id) as 201.
#[instrument(name = "create_product", skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Response, ApiError> {
    let candidate = validate_product_with_limit(&payload, state.max_name_length).map_err(|e| {
        warn!(error = %e, "Rejecting product payload");
        e
    })?;

    if state.storage.products.name_exists(&candidate.name).await? {
        warn!(name = %candidate.name, "Duplicate product name");
        return Err(ApiError::DuplicateName);
    }

    let created = state.storage.products.insert(&candidate).await?;
    info!(id = %created.id, name = %created.name, "Product created");

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

/// `PUT /products?id=` - replace all mutable fields of a product.
///
/// Requires the `id` query parameter. Validates the payload, rejects a
/// name held by any other product, and returns the updated row or 404
/// when the id matches nothing.
#[instrument(name = "update_product", skip(state, payload), fields(id = params.id.as_deref()))]
pub async fn update_product(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
    Json(payload): Json<Value>,
) -> Result<Response, ApiError> {
    let raw_id = params.id.ok_or(ApiError::MissingId)?;

    let candidate = validate_product_with_limit(&payload, state.max_name_length).map_err(|e| {
        warn!(error = %e, "Rejecting product payload");
        e
    })?;

    let id: ProductId = raw_id.parse()?;

    if state.storage.products.name_exists_excluding(&candidate.name, id).await? {
        warn!(name = %candidate.name, "Duplicate product name");
        return Err(ApiError::DuplicateName);
    }

    let updated =
        state.storage.products.update(id, &candidate).await?.ok_or(ApiError::NotFound)?;
    info!(id = %updated.id, "Product updated");

    Ok(Json(updated).into_response())
}

/// `DELETE /products?id=` - remove a product.
///
/// Requires the `id` query parameter. Returns a confirmation message, or
/// 404 when no row matched.
#[instrument(name = "delete_product", skip(state), fields(id = params.id.as_deref()))]
pub async fn delete_product(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> Result<Response, ApiError> {
    let raw_id = params.id.ok_or(ApiError::MissingId)?;
    let id: ProductId = raw_id.parse()?;

    if !state.storage.products.delete(id).await? {
        return Err(ApiError::NotFound);
    }

    info!(%id, "Product deleted");
    Ok(Json(json!({ "message": "Product deleted successfully" })).into_response())
}
