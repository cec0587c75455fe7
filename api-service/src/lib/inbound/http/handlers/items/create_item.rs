use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ItemResponseData;
use crate::domain::item::errors::ItemTitleError;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::ItemTitle;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_item(
    State(state): State<AppState>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    Json(body): Json<CreateItemRequest>,
) -> Result<ApiSuccess<ItemResponseData>, ApiError> {
    state
        .item_service
        .create_item(body.try_into_command()?, actor.id)
        .await
        .map_err(ApiError::from)
        .map(|ref item| ApiSuccess::new(StatusCode::CREATED, item.into()))
}

/// HTTP request body for creating an item (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateItemRequest {
    title: String,
    description: Option<String>,
    price_cents: Option<i64>,
}

#[derive(Debug, Clone, Error)]
pub(super) enum ParseItemRequestError {
    #[error("Invalid title: {0}")]
    Title(#[from] ItemTitleError),

    #[error("Price must not be negative")]
    NegativePrice,
}

impl CreateItemRequest {
    fn try_into_command(self) -> Result<CreateItemCommand, ParseItemRequestError> {
        let title = ItemTitle::new(self.title)?;
        if matches!(self.price_cents, Some(p) if p < 0) {
            return Err(ParseItemRequestError::NegativePrice);
        }
        Ok(CreateItemCommand::new(
            title,
            self.description,
            self.price_cents,
        ))
    }
}

impl From<ParseItemRequestError> for ApiError {
    fn from(err: ParseItemRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
