use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ItemResponseData;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct ListItemsQuery {
    #[serde(default)]
    skip: i64,
    #[serde(default = "default_limit")]
    limit: i64,
    owner_id: Option<String>,
}

fn default_limit() -> i64 {
    100
}

pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<ApiSuccess<Vec<ItemResponseData>>, ApiError> {
    let owner_id = query
        .owner_id
        .as_deref()
        .map(UserId::from_string)
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .item_service
        .list_items(query.skip, query.limit, owner_id)
        .await
        .map_err(ApiError::from)
        .map(|items| {
            ApiSuccess::new(
                StatusCode::OK,
                items.iter().map(ItemResponseData::from).collect(),
            )
        })
}
