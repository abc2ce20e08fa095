pub mod cart;

pub use cart::{Cart, CartLine, CartSummary, PricedItem};
