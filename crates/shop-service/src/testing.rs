//! In-memory repositories for service tests

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use shop_common::JwtService;
use shop_core::{
    DomainError, Item, ItemRepository, Order, OrderDetails, OrderLine, OrderLineDetails,
    OrderRepository, RepoResult, User, UserRepository,
};

use crate::services::{ServiceContext, ServiceContextBuilder};

#[derive(Clone)]
struct StoredItem {
    item: Item,
    deleted: bool,
}

#[derive(Default)]
struct State {
    users: Vec<(User, String)>,
    items: HashMap<Uuid, StoredItem>,
    item_order: Vec<Uuid>,
    orders: Vec<(Order, Vec<OrderLine>)>,
}

/// One store backing all three repository traits, so checkout can be atomic
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn user_count(&self) -> usize {
        self.state.lock().users.len()
    }

    pub fn password_hash_of(&self, email: &str) -> Option<String> {
        self.state
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(_, hash)| hash.clone())
    }

    pub fn seed_item(&self, name: &str, price: f64, stock: i32) -> Item {
        let item = Item::new(name.to_string(), price, stock);
        let mut state = self.state.lock();
        state.item_order.push(item.id);
        state.items.insert(
            item.id,
            StoredItem {
                item: item.clone(),
                deleted: false,
            },
        );
        item
    }

    pub fn stock_of(&self, id: Uuid) -> i32 {
        self.state.lock().items[&id].item.stock
    }

    pub fn set_price(&self, id: Uuid, price: f64) {
        if let Some(stored) = self.state.lock().items.get_mut(&id) {
            stored.item.price = price;
        }
    }

    pub fn order_count(&self) -> usize {
        self.state.lock().orders.len()
    }

    pub fn line_count(&self) -> usize {
        self.state.lock().orders.iter().map(|(_, l)| l.len()).sum()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let state = self.state.lock();
        Ok(state.users.iter().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let state = self.state.lock();
        Ok(state
            .users
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.state.lock().users.iter().any(|(u, _)| u.email == email))
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self
            .state
            .lock()
            .users
            .iter()
            .any(|(u, _)| u.username == username))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.users.iter().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        if state.users.iter().any(|(u, _)| u.username == user.username) {
            return Err(DomainError::UsernameAlreadyExists);
        }
        state.users.push((user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        let state = self.state.lock();
        Ok(state
            .users
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(_, hash)| hash.clone()))
    }
}

#[async_trait]
impl ItemRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Item>> {
        let state = self.state.lock();
        Ok(state
            .items
            .get(&id)
            .filter(|s| !s.deleted)
            .map(|s| s.item.clone()))
    }

    async fn list(&self) -> RepoResult<Vec<Item>> {
        let state = self.state.lock();
        Ok(state
            .item_order
            .iter()
            .filter_map(|id| state.items.get(id))
            .filter(|s| !s.deleted)
            .map(|s| s.item.clone())
            .collect())
    }

    async fn create(&self, item: &Item) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.item_order.push(item.id);
        state.items.insert(
            item.id,
            StoredItem {
                item: item.clone(),
                deleted: false,
            },
        );
        Ok(())
    }

    async fn update(&self, item: &Item) -> RepoResult<()> {
        let mut state = self.state.lock();
        match state.items.get_mut(&item.id) {
            Some(stored) if !stored.deleted => {
                stored.item = item.clone();
                Ok(())
            }
            _ => Err(DomainError::ItemNotFound(item.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut state = self.state.lock();
        match state.items.get_mut(&id) {
            Some(stored) if !stored.deleted => {
                stored.deleted = true;
                Ok(())
            }
            _ => Err(DomainError::ItemNotFound(id)),
        }
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn place(&self, order: &Order, lines: &[OrderLine]) -> RepoResult<()> {
        let mut state = self.state.lock();

        // Work on a copy; only a fully successful checkout is written back
        let mut items = state.items.clone();
        for line in lines {
            let stored = items
                .get_mut(&line.item_id)
                .filter(|s| !s.deleted)
                .ok_or(DomainError::ItemNotFound(line.item_id))?;
            if stored.item.stock < line.quantity {
                return Err(DomainError::InsufficientStock(line.item_id));
            }
            if stored.item.price != line.unit_price {
                return Err(DomainError::ItemChanged(line.item_id));
            }
            stored.item.stock -= line.quantity;
        }

        state.items = items;
        state.orders.push((order.clone(), lines.to_vec()));
        Ok(())
    }

    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<OrderDetails>> {
        let state = self.state.lock();
        Ok(state
            .orders
            .iter()
            .rev()
            .filter(|(order, _)| order.user_id == user_id)
            .map(|(order, lines)| OrderDetails {
                order: order.clone(),
                lines: lines
                    .iter()
                    .map(|line| OrderLineDetails {
                        line: line.clone(),
                        item_name: state
                            .items
                            .get(&line.item_id)
                            .map(|s| s.item.name.clone())
                            .unwrap_or_default(),
                    })
                    .collect(),
            })
            .collect())
    }
}

/// Service context wired to a fresh in-memory store
pub struct TestContext {
    pub ctx: ServiceContext,
    pub store: Arc<MemoryStore>,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let ctx = ServiceContextBuilder::new()
            .user_repo(store.clone())
            .item_repo(store.clone())
            .order_repo(store.clone())
            .jwt_service(Arc::new(JwtService::new("test-secret", 3600)))
            .build()
            .unwrap();

        Self { ctx, store }
    }

    /// Insert a user directly and return it
    pub fn seed_user(&self, role: shop_core::Role) -> User {
        let tag = Uuid::new_v4().simple().to_string();
        let user = User::new(
            format!("User {tag}"),
            format!("{tag}@example.com"),
            tag,
            role,
        );
        self.store
            .state
            .lock()
            .users
            .push((user.clone(), "unused".to_string()));
        user
    }
}
