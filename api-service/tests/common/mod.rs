#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use api_service::domain::auth::service::AuthService;
use api_service::domain::item::errors::ItemError;
use api_service::domain::item::models::Item;
use api_service::domain::item::models::ItemId;
use api_service::domain::item::ports::ItemRepository;
use api_service::domain::item::service::ItemService;
use api_service::domain::user::errors::UserError;
use api_service::domain::user::models::EmailAddress;
use api_service::domain::user::models::User;
use api_service::domain::user::models::UserId;
use api_service::domain::user::models::Username;
use api_service::domain::user::ports::UserRepository;
use api_service::domain::user::service::UserService;
use api_service::inbound::http::router::create_router;
use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use auth::JwtHandler;
use chrono::Utc;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TOKEN_TTL_MINUTES: i64 = 30;

/// In-memory user store implementing the repository port.
///
/// Enforces the same username/email uniqueness contract as the Postgres
/// adapter so conflict paths are exercised end to end.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();

        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<User>, UserError> {
        let users = self.users.lock().unwrap();
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.created_at);
        Ok(all
            .into_iter()
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();

        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.username == user.username)
        {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        users
            .remove(id)
            .map(|_| ())
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

/// In-memory item store implementing the repository port.
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: Mutex<HashMap<ItemId, Item>>,
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, item: Item) -> Result<Item, ItemError> {
        self.items.lock().unwrap().insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError> {
        Ok(self.items.lock().unwrap().get(id).cloned())
    }

    async fn list(
        &self,
        skip: i64,
        limit: i64,
        owner_id: Option<UserId>,
    ) -> Result<Vec<Item>, ItemError> {
        let items = self.items.lock().unwrap();
        let mut matching: Vec<Item> = items
            .values()
            .filter(|item| owner_id.map_or(true, |owner| item.owner_id == owner))
            .cloned()
            .collect();
        matching.sort_by_key(|item| item.created_at);
        Ok(matching
            .into_iter()
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn update(&self, item: Item) -> Result<Item, ItemError> {
        let mut items = self.items.lock().unwrap();
        if !items.contains_key(&item.id) {
            return Err(ItemError::NotFound(item.id.to_string()));
        }
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn delete(&self, id: &ItemId) -> Result<(), ItemError> {
        let mut items = self.items.lock().unwrap();
        items
            .remove(id)
            .map(|_| ())
            .ok_or(ItemError::NotFound(id.to_string()))
    }
}

/// Test application that spawns a real server on a random port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub users: Arc<InMemoryUserRepository>,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let users = Arc::new(InMemoryUserRepository::default());
        let items = Arc::new(InMemoryItemRepository::default());

        let authenticator = Arc::new(Authenticator::new(TEST_SECRET));

        let user_service = Arc::new(UserService::new(Arc::clone(&users)));
        let item_service = Arc::new(ItemService::new(items));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&users),
            authenticator,
            TOKEN_TTL_MINUTES,
        ));

        let router = create_router(user_service, item_service, auth_service);

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            users,
            jwt_handler: JwtHandler::new(TEST_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user through the API and return its id.
    pub async fn register_user(&self, username: &str, email: &str, password: &str) -> String {
        let response = self
            .post("/api/v1/users")
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_str().expect("Missing user id").to_string()
    }

    /// Log in through the API and return the bearer token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/v1/auth/login")
            .json(&serde_json::json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["access_token"]
            .as_str()
            .expect("Missing access token")
            .to_string()
    }

    /// Insert a user directly into the store, bypassing the API.
    ///
    /// Used to set up states registration cannot produce: superusers and
    /// inactive accounts.
    pub async fn seed_user(
        &self,
        username: &str,
        password: &str,
        is_active: bool,
        is_superuser: bool,
    ) -> UserId {
        let hasher = auth::PasswordHasher::new();
        let user = User {
            id: UserId::new(),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(format!("{}@example.com", username)).unwrap(),
            password_hash: hasher.hash(password).unwrap(),
            full_name: None,
            is_active,
            is_superuser,
            created_at: Utc::now(),
            updated_at: None,
        };
        let id = user.id;
        self.users.create(user).await.expect("Failed to seed user");
        id
    }

    /// Sign a token for an arbitrary subject with an explicit expiry.
    pub fn token_with_expiration(&self, subject: &str, exp: i64) -> String {
        self.jwt_handler
            .encode(&Claims::with_expiration(subject, exp))
            .expect("Failed to encode token")
    }
}
