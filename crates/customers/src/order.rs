use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use coffeeshop_core::{CustomerId, Entity, OrderId};

use crate::price::Price;

/// A single purchase: who bought which product, at what price.
///
/// `P` is the product identifier (the coffee). It is opaque to this crate and
/// only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order<P> {
    id: OrderId,
    customer_id: CustomerId,
    coffee: P,
    price: Price,
    placed_at: DateTime<Utc>,
}

impl<P> Order<P> {
    pub fn new(
        id: OrderId,
        customer_id: CustomerId,
        coffee: P,
        price: Price,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_id,
            coffee,
            price,
            placed_at,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    /// The customer that placed this order.
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn coffee(&self) -> &P {
        &self.coffee
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}

impl<P> Entity for Order<P> {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Builds orders on behalf of a customer.
///
/// The registry owns one of these, so customers never construct orders
/// directly. Any `Fn(CustomerId, P, Price) -> Order<P>` closure is a factory.
pub trait OrderFactory<P> {
    fn create_order(&self, customer_id: CustomerId, coffee: P, price: Price) -> Order<P>;
}

/// Default factory: fresh UUIDv7 order id, wall-clock placement time.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemOrderFactory;

impl<P> OrderFactory<P> for SystemOrderFactory {
    fn create_order(&self, customer_id: CustomerId, coffee: P, price: Price) -> Order<P> {
        Order::new(OrderId::new(), customer_id, coffee, price, Utc::now())
    }
}

impl<P, F> OrderFactory<P> for F
where
    F: Fn(CustomerId, P, Price) -> Order<P>,
{
    fn create_order(&self, customer_id: CustomerId, coffee: P, price: Price) -> Order<P> {
        self(customer_id, coffee, price)
    }
}
