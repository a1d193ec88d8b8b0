//! Customers domain module (customers, their coffee orders, top-spender query).
//!
//! This crate contains business rules for customers and the orders they place,
//! implemented purely as deterministic in-memory domain logic (no IO, no storage).
//! All customers live in an explicitly owned [`CustomerRegistry`]; there is no
//! process-wide state.

pub mod customer;
pub mod name;
pub mod order;
pub mod price;
pub mod registry;
pub mod shared;

pub use customer::Customer;
pub use name::CustomerName;
pub use order::{Order, OrderFactory, SystemOrderFactory};
pub use price::Price;
pub use registry::CustomerRegistry;
pub use shared::SharedCustomerRegistry;
