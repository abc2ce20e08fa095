use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Quantities per product for one customer session.
///
/// Every stored quantity is positive; entries keep the order in which
/// products were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<(Uuid, u32)>,
}

/// Name and unit price of a product that can go into a cart
#[derive(Debug, Clone)]
pub struct PricedItem {
    pub name: String,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub product_id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub line_total: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
    pub item_count: u32,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self, product_id: Uuid) -> u32 {
        self.entries
            .iter()
            .find(|(id, _)| *id == product_id)
            .map_or(0, |(_, qty)| *qty)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add one unit
    pub fn increment(&mut self, product_id: Uuid) {
        self.add(product_id, 1);
    }

    /// Add `quantity` units; adding zero is a no-op
    pub fn add(&mut self, product_id: Uuid, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.entries.iter_mut().find(|(id, _)| *id == product_id) {
            Some((_, qty)) => *qty = qty.saturating_add(quantity),
            None => self.entries.push((product_id, quantity)),
        }
    }

    /// Remove one unit; the entry disappears when it reaches zero
    pub fn decrement(&mut self, product_id: Uuid) {
        if let Some(pos) = self.entries.iter().position(|(id, _)| *id == product_id) {
            if self.entries[pos].1 <= 1 {
                self.entries.remove(pos);
            } else {
                self.entries[pos].1 -= 1;
            }
        }
    }

    /// Price the cart. Products missing from `catalog` are left out.
    pub fn summarize(&self, catalog: &HashMap<Uuid, PricedItem>) -> CartSummary {
        let mut summary = CartSummary::default();

        for (product_id, quantity) in &self.entries {
            let Some(item) = catalog.get(product_id) else {
                continue;
            };
            let line_total = item.unit_price * Decimal::from(*quantity);
            summary.total += line_total;
            summary.item_count += quantity;
            summary.lines.push(CartLine {
                product_id: *product_id,
                name: item.name.clone(),
                quantity: *quantity,
                line_total,
            });
        }

        summary
    }
}
