use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ItemTitle;
use crate::domain::item::ports::ItemRepository;
use crate::domain::user::models::UserId;

pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw database row; validated into the domain entity on read.
#[derive(Debug, FromRow)]
struct ItemRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    price_cents: Option<i64>,
    is_active: bool,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ItemRow> for Item {
    type Error = ItemError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        Ok(Item {
            id: ItemId(row.id),
            title: ItemTitle::new(row.title)?,
            description: row.description,
            price_cents: row.price_cents,
            is_active: row.is_active,
            owner_id: UserId(row.owner_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn create(&self, item: Item) -> Result<Item, ItemError> {
        sqlx::query(
            r#"
            INSERT INTO items (id, title, description, price_cents,
                               is_active, owner_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(item.id.0)
        .bind(item.title.as_str())
        .bind(&item.description)
        .bind(item.price_cents)
        .bind(item.is_active)
        .bind(item.owner_id.0)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        Ok(item)
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, title, description, price_cents,
                   is_active, owner_id, created_at, updated_at
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        row.map(Item::try_from).transpose()
    }

    async fn list(
        &self,
        skip: i64,
        limit: i64,
        owner_id: Option<UserId>,
    ) -> Result<Vec<Item>, ItemError> {
        let rows = match owner_id {
            Some(owner) => {
                sqlx::query_as::<_, ItemRow>(
                    r#"
                    SELECT id, title, description, price_cents,
                           is_active, owner_id, created_at, updated_at
                    FROM items
                    WHERE owner_id = $3
                    ORDER BY created_at ASC
                    OFFSET $1 LIMIT $2
                    "#,
                )
                .bind(skip)
                .bind(limit)
                .bind(owner.0)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ItemRow>(
                    r#"
                    SELECT id, title, description, price_cents,
                           is_active, owner_id, created_at, updated_at
                    FROM items
                    ORDER BY created_at ASC
                    OFFSET $1 LIMIT $2
                    "#,
                )
                .bind(skip)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Item::try_from).collect()
    }

    async fn update(&self, item: Item) -> Result<Item, ItemError> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET title = $2, description = $3, price_cents = $4,
                is_active = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(item.id.0)
        .bind(item.title.as_str())
        .bind(&item.description)
        .bind(item.price_cents)
        .bind(item.is_active)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(item.id.to_string()));
        }

        Ok(item)
    }

    async fn delete(&self, id: &ItemId) -> Result<(), ItemError> {
        let result = sqlx::query(
            r#"
            DELETE FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
