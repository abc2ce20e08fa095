use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::ordering::models::{Cart, CartLine, CartSummary};
use crate::shared::constants::{MAX_CART_QUANTITY, MAX_ORDER_LINES};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItemDto {
    pub product_id: Uuid,
    #[validate(range(min = 1, max = MAX_CART_QUANTITY, message = "Quantity must be between 1 and 99"))]
    pub quantity: u32,
}

/// Cart contents submitted for a WhatsApp order
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct WhatsAppOrderRequestDto {
    #[validate(
        length(max = MAX_ORDER_LINES, message = "Too many order lines"),
        nested
    )]
    pub items: Vec<OrderItemDto>,
}

impl WhatsAppOrderRequestDto {
    /// Repeated product ids are added together
    pub fn to_cart(&self) -> Cart {
        let mut cart = Cart::new();
        for item in &self.items {
            cart.add(item.product_id, item.quantity);
        }
        cart
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderLineDto {
    pub product_id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub line_total: Decimal,
}

impl From<CartLine> for OrderLineDto {
    fn from(line: CartLine) -> Self {
        Self {
            product_id: line.product_id,
            name: line.name,
            quantity: line.quantity,
            line_total: line.line_total,
        }
    }
}

/// Prefilled WhatsApp message and the link opening it
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WhatsAppOrderResponseDto {
    pub message: String,
    pub link: String,
    pub lines: Vec<OrderLineDto>,
    pub total: Decimal,
    pub item_count: u32,
}

impl WhatsAppOrderResponseDto {
    pub fn new(summary: CartSummary, message: String, link: String) -> Self {
        Self {
            message,
            link,
            lines: summary.lines.into_iter().map(OrderLineDto::from).collect(),
            total: summary.total,
            item_count: summary.item_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: Uuid, quantity: u32) -> OrderItemDto {
        OrderItemDto {
            product_id,
            quantity,
        }
    }

    #[test]
    fn test_quantity_bounds() {
        let id = Uuid::new_v4();
        let ok = WhatsAppOrderRequestDto {
            items: vec![item(id, 1), item(id, MAX_CART_QUANTITY)],
        };
        assert!(ok.validate().is_ok());

        let zero = WhatsAppOrderRequestDto {
            items: vec![item(id, 0)],
        };
        assert!(zero.validate().is_err());

        let too_many = WhatsAppOrderRequestDto {
            items: vec![item(id, MAX_CART_QUANTITY + 1)],
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_order_line_count_is_capped() {
        let at_limit = WhatsAppOrderRequestDto {
            items: (0..MAX_ORDER_LINES)
                .map(|_| item(Uuid::new_v4(), 1))
                .collect(),
        };
        assert!(at_limit.validate().is_ok());

        let over_limit = WhatsAppOrderRequestDto {
            items: (0..=MAX_ORDER_LINES)
                .map(|_| item(Uuid::new_v4(), 1))
                .collect(),
        };
        assert!(over_limit.validate().is_err());
    }

    #[test]
    fn test_empty_items_are_valid() {
        let dto = WhatsAppOrderRequestDto { items: vec![] };
        assert!(dto.validate().is_ok());
        assert!(dto.to_cart().is_empty());
    }

    #[test]
    fn test_repeated_products_are_summed() {
        let id = Uuid::new_v4();
        let dto = WhatsAppOrderRequestDto {
            items: vec![item(id, 2), item(id, 3)],
        };
        assert_eq!(dto.to_cart().quantity(id), 5);
    }
}
