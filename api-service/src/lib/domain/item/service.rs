use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::UpdateItemCommand;
use crate::domain::item::ports::ItemRepository;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for item operations.
///
/// Generic over the repository for testability. Authorization is not decided
/// here: the route layer resolves the acting user and consults the ownership
/// guard before calling mutations.
pub struct ItemService<IR>
where
    IR: ItemRepository,
{
    repository: Arc<IR>,
}

impl<IR> ItemService<IR>
where
    IR: ItemRepository,
{
    /// Create a new item service with an injected repository.
    pub fn new(repository: Arc<IR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<IR> ItemServicePort for ItemService<IR>
where
    IR: ItemRepository,
{
    async fn create_item(
        &self,
        command: CreateItemCommand,
        owner_id: UserId,
    ) -> Result<Item, ItemError> {
        let item = Item {
            id: ItemId::new(),
            title: command.title,
            description: command.description,
            price_cents: command.price_cents,
            is_active: true,
            owner_id,
            created_at: Utc::now(),
            updated_at: None,
        };

        self.repository.create(item).await
    }

    async fn get_item(&self, id: &ItemId) -> Result<Item, ItemError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id.to_string()))
    }

    async fn list_items(
        &self,
        skip: i64,
        limit: i64,
        owner_id: Option<UserId>,
    ) -> Result<Vec<Item>, ItemError> {
        self.repository.list(skip, limit, owner_id).await
    }

    async fn update_item(
        &self,
        id: &ItemId,
        command: UpdateItemCommand,
    ) -> Result<Item, ItemError> {
        let mut item = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id.to_string()))?;

        if let Some(new_title) = command.title {
            item.title = new_title;
        }

        if let Some(new_description) = command.description {
            item.description = Some(new_description);
        }

        if let Some(new_price) = command.price_cents {
            item.price_cents = Some(new_price);
        }

        if let Some(is_active) = command.is_active {
            item.is_active = is_active;
        }

        item.updated_at = Some(Utc::now());

        self.repository.update(item).await
    }

    async fn delete_item(&self, id: &ItemId) -> Result<(), ItemError> {
        self.repository.delete(id).await
    }
}
