use coffeeshop_core::{CustomerId, Entity};

use crate::name::CustomerName;
use crate::order::{Order, OrderFactory};
use crate::price::Price;

/// Entity: Customer.
///
/// Owns the orders it has placed, in placement order. Customers are only
/// created through [`crate::CustomerRegistry::register`], so every customer
/// that exists is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer<P> {
    id: CustomerId,
    name: CustomerName,
    orders: Vec<Order<P>>,
}

impl<P> Customer<P> {
    pub(crate) fn new(id: CustomerId, name: CustomerName) -> Self {
        Self {
            id,
            name,
            orders: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &CustomerName {
        &self.name
    }

    pub fn orders(&self) -> &[Order<P>] {
        &self.orders
    }

    /// Place an order for `coffee` at `price` and return it.
    ///
    /// Neither argument is validated.
    pub fn create_order<F>(&mut self, factory: &F, coffee: P, price: Price) -> &Order<P>
    where
        F: OrderFactory<P> + ?Sized,
    {
        let order = factory.create_order(self.id, coffee, price);
        tracing::debug!(
            customer_id = %self.id,
            order_id = %order.id_typed(),
            price = %order.price(),
            "order placed"
        );
        self.orders.push(order);
        &self.orders[self.orders.len() - 1]
    }
}

impl<P: PartialEq> Customer<P> {
    /// Orders of this customer for the given product, in placement order.
    pub fn orders_of<'a>(&'a self, coffee: &'a P) -> impl Iterator<Item = &'a Order<P>> + 'a {
        self.orders.iter().filter(move |o| o.coffee() == coffee)
    }

    /// Total spend on the given product (zero when never ordered).
    pub fn total_spent_on(&self, coffee: &P) -> Price {
        self.orders_of(coffee).map(Order::price).sum()
    }
}

impl<P> Entity for Customer<P> {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
