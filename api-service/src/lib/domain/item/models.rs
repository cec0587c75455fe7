use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::item::errors::ItemIdError;
use crate::domain::item::errors::ItemTitleError;
use crate::domain::user::models::UserId;

/// Item aggregate entity.
///
/// An owned resource: `owner_id` is set from the creating user and is
/// immutable afterwards. The owner is held as a plain identifier, never as a
/// live reference; an "owner with items" view is an explicit query.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub title: ItemTitle,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub is_active: bool,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Item unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an item ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ItemIdError> {
        Uuid::parse_str(s)
            .map(ItemId)
            .map_err(|e| ItemIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Item title value type
///
/// Ensures the title is 1-100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTitle(String);

impl ItemTitle {
    const MAX_LENGTH: usize = 100;

    /// Create a new valid item title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty
    /// * `TooLong` - Title longer than 100 characters
    pub fn new(title: String) -> Result<Self, ItemTitleError> {
        if title.is_empty() {
            return Err(ItemTitleError::Empty);
        }
        if title.len() > Self::MAX_LENGTH {
            return Err(ItemTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: title.len(),
            });
        }
        Ok(Self(title))
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new item with domain types.
///
/// The owner is not part of the command; it is supplied by the route layer
/// from the authenticated user.
#[derive(Debug)]
pub struct CreateItemCommand {
    pub title: ItemTitle,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
}

impl CreateItemCommand {
    /// Construct a new create item command.
    ///
    /// # Arguments
    /// * `title` - Validated item title
    /// * `description` - Optional free-form description
    /// * `price_cents` - Optional non-negative price in cents
    pub fn new(title: ItemTitle, description: Option<String>, price_cents: Option<i64>) -> Self {
        Self {
            title,
            description,
            price_cents,
        }
    }
}

/// Command to update an existing item with optional validated fields.
///
/// All fields are optional to support partial updates; ownership cannot be
/// changed.
#[derive(Debug, Default)]
pub struct UpdateItemCommand {
    pub title: Option<ItemTitle>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_length_bounds() {
        assert!(ItemTitle::new(String::new()).is_err());
        assert!(ItemTitle::new("a".to_string()).is_ok());
        assert!(ItemTitle::new("a".repeat(100)).is_ok());
        assert!(matches!(
            ItemTitle::new("a".repeat(101)),
            Err(ItemTitleError::TooLong { .. })
        ));
    }

    #[test]
    fn test_item_id_round_trip() {
        let id = ItemId::new();
        let parsed = ItemId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }
}
