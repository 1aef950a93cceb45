use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::directory::{RenameInput, Restaurant, RestaurantDirectory, RestaurantInput};
use service::errors::ServiceError;

use crate::errors::JsonApiError;

#[utoipa::path(
    get, path = "/restaurants", tag = "restaurants",
    responses(
        (status = 200, description = "Full list of restaurants", body = [crate::openapi::RestaurantDoc])
    )
)]
pub async fn list(State(directory): State<Arc<RestaurantDirectory>>) -> Json<Vec<Restaurant>> {
    let records = directory.list().await;
    info!(count = records.len(), "list restaurants");
    Json(records)
}

#[utoipa::path(
    post, path = "/restaurant", tag = "restaurants",
    request_body = crate::openapi::RestaurantInputDoc,
    responses(
        (status = 200, description = "Created", body = String)
    )
)]
pub async fn create(
    State(directory): State<Arc<RestaurantDirectory>>,
    Json(input): Json<RestaurantInput>,
) -> String {
    let rec = directory.create(input).await;
    let total = directory.len().await;
    let names: Vec<String> = directory.list().await.into_iter().map(|r| r.name).collect();
    info!(id = rec.id, name = %rec.name, total, "created restaurant");
    format!(
        "restaurant with the id {} created! directory now holds {} restaurants: {}",
        rec.id,
        total,
        names.join(", ")
    )
}

#[utoipa::path(
    put, path = "/restaurant/{id}", tag = "restaurants",
    params(("id" = i64, Path, description = "Restaurant id")),
    request_body = crate::openapi::RenameInputDoc,
    responses(
        (status = 200, description = "Updated", body = String),
        (status = 404, description = "Not Found")
    )
)]
pub async fn rename(
    State(directory): State<Arc<RestaurantDirectory>>,
    Path(id): Path<i64>,
    Json(input): Json<RenameInput>,
) -> Result<String, JsonApiError> {
    match directory.rename(id, input.name).await {
        Ok(rec) => {
            info!(id = rec.id, name = %rec.name, "renamed restaurant");
            Ok(format!("restaurant with the id {} has been updated!", id))
        }
        Err(e @ ServiceError::NotFound(_)) => {
            Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    delete, path = "/restaurant/{id}", tag = "restaurants",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Deleted (no-op when nothing matches)", body = String)
    )
)]
pub async fn remove(
    State(directory): State<Arc<RestaurantDirectory>>,
    Path(id): Path<i64>,
) -> String {
    let removed = directory.remove(id).await;
    info!(id, removed, "deleted restaurant");
    format!("restaurant with the id {} deleted from the directory!", id)
}
