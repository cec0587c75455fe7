use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::create_item::ParseItemRequestError;
use super::ItemResponseData;
use crate::domain::auth::policy::can_modify;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ItemTitle;
use crate::domain::item::models::UpdateItemCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an item (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub is_active: Option<bool>,
}

impl UpdateItemRequest {
    fn try_into_command(self) -> Result<UpdateItemCommand, ParseItemRequestError> {
        let title = self.title.map(ItemTitle::new).transpose()?;
        if matches!(self.price_cents, Some(p) if p < 0) {
            return Err(ParseItemRequestError::NegativePrice);
        }

        Ok(UpdateItemCommand {
            title,
            description: self.description,
            price_cents: self.price_cents,
            is_active: self.is_active,
        })
    }
}

pub async fn update_item(
    State(state): State<AppState>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<ApiSuccess<ItemResponseData>, ApiError> {
    let item_id = ItemId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    // Existence is checked first: a missing item is 404 for any
    // authenticated caller, owner or not.
    let item = state
        .item_service
        .get_item(&item_id)
        .await
        .map_err(ApiError::from)?;

    if !can_modify(&actor, item.owner_id) {
        return Err(ApiError::Forbidden("Not enough permissions".to_string()));
    }

    let command = req.try_into_command()?;

    state
        .item_service
        .update_item(&item_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref item| ApiSuccess::new(StatusCode::OK, item.into()))
}
