// src/models/mod.rs

//! Contains data structures representing database entities.

pub mod cart_item;
pub mod fundraiser;
pub mod order;

// Re-export the model structs for convenient access
pub use cart_item::CartItem;
pub use fundraiser::{DonationType, Fundraiser, FundraiserTotals};
pub use order::{Order, OrderStatus, RawOrder, ShippingAddress};
