use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::item::models::Item;

pub mod create_item;
pub mod delete_item;
pub mod get_item;
pub mod list_items;
pub mod list_my_items;
pub mod update_item;

/// Response body for item operations.
///
/// The owner appears as a plain identifier; callers wanting owner details
/// fetch the user explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemResponseData {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub is_active: bool,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Item> for ItemResponseData {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title.as_str().to_string(),
            description: item.description.clone(),
            price_cents: item.price_cents,
            is_active: item.is_active,
            owner_id: item.owner_id.to_string(),
            created_at: item.created_at,
        }
    }
}
