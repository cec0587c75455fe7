use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::auth::policy::can_modify;
use crate::domain::item::models::ItemId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_item(
    State(state): State<AppState>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let item_id = ItemId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let item = state
        .item_service
        .get_item(&item_id)
        .await
        .map_err(ApiError::from)?;

    if !can_modify(&actor, item.owner_id) {
        return Err(ApiError::Forbidden("Not enough permissions".to_string()));
    }

    state
        .item_service
        .delete_item(&item_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
