//! Entity to DTO mappers

use shop_common::AccessToken;
use shop_core::{Item, OrderDetails, OrderLineDetails, User};

use super::responses::{
    ItemRef, ItemResponse, OrderLineResponse, OrderResponse, ProfileResponse, TokenResponse,
    UserResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

impl From<AccessToken> for TokenResponse {
    fn from(token: AccessToken) -> Self {
        Self {
            token: token.token,
            token_type: token.token_type,
            expires_in: token.expires_in,
        }
    }
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            stock: item.stock,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<OrderLineDetails> for OrderLineResponse {
    fn from(details: OrderLineDetails) -> Self {
        Self {
            item: ItemRef {
                id: details.line.item_id,
                name: details.item_name,
            },
            quantity: details.line.quantity,
            unit_price: details.line.unit_price,
            total_price: details.line.total_price,
        }
    }
}

impl From<OrderDetails> for OrderResponse {
    fn from(details: OrderDetails) -> Self {
        Self {
            id: details.order.id,
            total_price: details.order.total_price,
            is_success_paid: details.order.is_success_paid,
            created_at: details.order.created_at,
            lines: details.lines.into_iter().map(OrderLineResponse::from).collect(),
        }
    }
}

impl ProfileResponse {
    pub fn new(user: User, orders: Vec<OrderDetails>) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            username: user.username,
            role: user.role,
            created_at: user.created_at,
            orders: orders.into_iter().map(OrderResponse::from).collect(),
        }
    }
}
