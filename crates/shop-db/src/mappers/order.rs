//! Order entity <-> model mapper

use shop_core::{Order, OrderLine, OrderLineDetails};

use crate::models::{OrderLineWithItemModel, OrderModel};

impl From<OrderModel> for Order {
    fn from(model: OrderModel) -> Self {
        Order {
            id: model.id,
            user_id: model.user_id,
            total_price: model.total_price,
            is_success_paid: model.is_success_paid,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<OrderLineWithItemModel> for OrderLineDetails {
    fn from(model: OrderLineWithItemModel) -> Self {
        OrderLineDetails {
            line: OrderLine {
                id: model.id,
                order_id: model.order_id,
                item_id: model.item_id,
                quantity: model.quantity,
                unit_price: model.unit_price,
                total_price: model.total_price,
                created_at: model.created_at,
            },
            item_name: model.item_name,
        }
    }
}
