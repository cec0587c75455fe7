use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::UpdateItemCommand;
use crate::domain::user::models::UserId;

/// Port for item domain service operations.
#[async_trait]
pub trait ItemServicePort: Send + Sync + 'static {
    /// Create a new item owned by the given user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_item(&self, command: CreateItemCommand, owner_id: UserId)
        -> Result<Item, ItemError>;

    /// Retrieve item by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_item(&self, id: &ItemId) -> Result<Item, ItemError>;

    /// Retrieve a page of items, optionally filtered by owner.
    ///
    /// # Arguments
    /// * `skip` - Rows to skip
    /// * `limit` - Maximum rows to return
    /// * `owner_id` - Restrict to items owned by this user when set
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_items(
        &self,
        skip: i64,
        limit: i64,
        owner_id: Option<UserId>,
    ) -> Result<Vec<Item>, ItemError>;

    /// Update existing item with optional fields.
    ///
    /// Ownership is immutable; the command carries no owner.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_item(&self, id: &ItemId, command: UpdateItemCommand)
        -> Result<Item, ItemError>;

    /// Delete existing item.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_item(&self, id: &ItemId) -> Result<(), ItemError>;
}

/// Persistence operations for item aggregate.
#[async_trait]
pub trait ItemRepository: Send + Sync + 'static {
    /// Persist new item to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, item: Item) -> Result<Item, ItemError>;

    /// Retrieve item by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError>;

    /// Retrieve a page of items ordered by creation time, optionally
    /// filtered by owner.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(
        &self,
        skip: i64,
        limit: i64,
        owner_id: Option<UserId>,
    ) -> Result<Vec<Item>, ItemError>;

    /// Update existing item in storage.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, item: Item) -> Result<Item, ItemError>;

    /// Remove item from storage.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &ItemId) -> Result<(), ItemError>;
}
