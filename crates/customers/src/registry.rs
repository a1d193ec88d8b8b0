//! In-memory customer registry and the top-spender query.

use coffeeshop_core::{CustomerId, DomainError, DomainResult};

use crate::customer::Customer;
use crate::name::CustomerName;
use crate::order::{Order, OrderFactory, SystemOrderFactory};
use crate::price::Price;

/// Append-only, insertion-ordered collection of every registered customer.
///
/// Customers are never removed. The registry owns the [`OrderFactory`] used
/// when its customers place orders.
pub struct CustomerRegistry<P, F = SystemOrderFactory> {
    customers: Vec<Customer<P>>,
    factory: F,
}

impl<P> CustomerRegistry<P> {
    pub fn new() -> Self {
        Self::with_factory(SystemOrderFactory)
    }
}

impl<P> Default for CustomerRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, F> CustomerRegistry<P, F> {
    pub fn with_factory(factory: F) -> Self {
        Self {
            customers: Vec::new(),
            factory,
        }
    }

    /// Register a new customer under `name`.
    ///
    /// The name is validated before anything is appended; a rejected name
    /// leaves the registry untouched.
    pub fn register(&mut self, name: impl Into<String>) -> DomainResult<CustomerId> {
        let name = CustomerName::parse(name).inspect_err(|err| {
            tracing::debug!(error = %err, "customer registration rejected");
        })?;

        let id = CustomerId::new();
        tracing::debug!(customer_id = %id, name = %name, "customer registered");
        self.customers.push(Customer::new(id, name));
        Ok(id)
    }

    pub fn get(&self, id: CustomerId) -> Option<&Customer<P>> {
        self.customers.iter().find(|c| c.id_typed() == id)
    }

    pub fn customer(&self, id: CustomerId) -> DomainResult<&Customer<P>> {
        self.get(id).ok_or_else(DomainError::not_found)
    }

    /// All customers, in registration order.
    pub fn customers(&self) -> &[Customer<P>] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}

impl<P, F> CustomerRegistry<P, F>
where
    F: OrderFactory<P>,
{
    /// Place an order on behalf of a registered customer.
    pub fn create_order(
        &mut self,
        customer_id: CustomerId,
        coffee: P,
        price: Price,
    ) -> DomainResult<&Order<P>> {
        let factory = &self.factory;
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id_typed() == customer_id)
            .ok_or_else(DomainError::not_found)?;
        Ok(customer.create_order(factory, coffee, price))
    }
}

impl<P: PartialEq, F> CustomerRegistry<P, F> {
    /// The customer who spent the most on `coffee`, or `None` if nobody spent
    /// a strictly positive amount on it.
    ///
    /// Ties go to the customer registered first.
    pub fn most_aficionado(&self, coffee: &P) -> Option<&Customer<P>> {
        self.top_spender(coffee).map(|(customer, _)| customer)
    }

    /// Like [`Self::most_aficionado`], also returning the winning total.
    pub fn top_spender(&self, coffee: &P) -> Option<(&Customer<P>, Price)> {
        let mut top = None;
        let mut max_spend = Price::ZERO;

        for customer in &self.customers {
            let total = customer.total_spent_on(coffee);
            // Strict comparison: an equal total never displaces an earlier customer.
            if total > max_spend {
                max_spend = total;
                top = Some(customer);
            }
        }

        top.map(|customer| (customer, max_spend))
    }
}

impl<P: core::fmt::Debug, F> core::fmt::Debug for CustomerRegistry<P, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CustomerRegistry")
            .field("customers", &self.customers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use coffeeshop_core::{Entity, OrderId};

    fn registry() -> CustomerRegistry<&'static str> {
        CustomerRegistry::new()
    }

    fn cents(amount: i64) -> Price {
        Price::new(amount)
    }

    #[test]
    fn register_appends_customer_at_end() {
        let mut registry = registry();
        let first = registry.register("Alice").unwrap();
        let second = registry.register("Bob").unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.customers()[0].id_typed(), first);
        assert_eq!(registry.customers()[1].id_typed(), second);
        assert_eq!(registry.customer(second).unwrap().name().as_str(), "Bob");
    }

    #[test]
    fn register_rejects_invalid_name_without_appending() {
        let mut registry = registry();
        registry.register("Alice").unwrap();

        let err = registry.register("").unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }

        let err = registry.register("a name that is too long").unwrap_err();
        assert!(err.is_validation());

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn same_name_registers_distinct_customers() {
        let mut registry = registry();
        let a = registry.register("Sam").unwrap();
        let b = registry.register("Sam").unwrap();
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn create_order_for_unknown_customer_is_not_found() {
        let mut registry = registry();
        registry.register("Alice").unwrap();

        let err = registry
            .create_order(CustomerId::new(), "Latte", cents(300))
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
        assert!(registry.customers()[0].orders().is_empty());
    }

    #[test]
    fn create_order_only_touches_the_owning_customer() {
        let mut registry = registry();
        let alice = registry.register("Alice").unwrap();
        let bob = registry.register("Bob").unwrap();

        registry.create_order(alice, "Latte", cents(300)).unwrap();
        registry.create_order(alice, "Mocha", cents(400)).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.customer(alice).unwrap().orders().len(), 2);
        assert!(registry.customer(bob).unwrap().orders().is_empty());
    }

    #[test]
    fn most_aficionado_picks_highest_total() {
        let mut registry = registry();
        let a = registry.register("A").unwrap();
        let b = registry.register("B").unwrap();

        registry.create_order(a, "X", cents(3)).unwrap();
        registry.create_order(a, "X", cents(4)).unwrap();
        registry.create_order(b, "X", cents(5)).unwrap();

        let top = registry.most_aficionado(&"X").unwrap();
        assert_eq!(top.id_typed(), a);
        assert_eq!(registry.top_spender(&"X").unwrap().1, cents(7));
    }

    #[test]
    fn most_aficionado_tie_goes_to_first_registered() {
        let mut registry = registry();
        let a = registry.register("A").unwrap();
        let b = registry.register("B").unwrap();

        registry.create_order(a, "Y", cents(5)).unwrap();
        registry.create_order(b, "Y", cents(2)).unwrap();
        registry.create_order(b, "Y", cents(3)).unwrap();

        assert_eq!(registry.most_aficionado(&"Y").unwrap().id_typed(), a);
    }

    #[test]
    fn most_aficionado_is_none_when_product_never_ordered() {
        let mut registry = registry();
        let a = registry.register("A").unwrap();
        registry.create_order(a, "X", cents(10)).unwrap();

        assert!(registry.most_aficionado(&"Z").is_none());
        assert!(CustomerRegistry::<&str>::new().most_aficionado(&"Z").is_none());
    }

    #[test]
    fn most_aficionado_is_none_when_every_total_is_zero() {
        let mut registry = registry();
        let a = registry.register("A").unwrap();
        let b = registry.register("B").unwrap();
        registry.create_order(a, "X", cents(0)).unwrap();
        registry.create_order(b, "X", cents(5)).unwrap();
        registry.create_order(b, "X", cents(-5)).unwrap();

        assert!(registry.most_aficionado(&"X").is_none());
    }

    #[test]
    fn most_aficionado_never_returns_sole_zero_spender() {
        let mut registry = registry();
        let only = registry.register("Only").unwrap();
        registry.create_order(only, "X", cents(0)).unwrap();

        assert!(registry.most_aficionado(&"X").is_none());
    }

    #[test]
    fn most_aficionado_skips_negative_totals() {
        let mut registry = registry();
        let a = registry.register("A").unwrap();
        let b = registry.register("B").unwrap();
        registry.create_order(a, "X", cents(-10)).unwrap();
        registry.create_order(b, "X", cents(1)).unwrap();

        assert_eq!(registry.most_aficionado(&"X").unwrap().id_typed(), b);
    }

    #[test]
    fn most_aficionado_ignores_other_products() {
        let mut registry = registry();
        let a = registry.register("A").unwrap();
        let b = registry.register("B").unwrap();
        registry.create_order(a, "Mocha", cents(1_000)).unwrap();
        registry.create_order(a, "Latte", cents(100)).unwrap();
        registry.create_order(b, "Latte", cents(200)).unwrap();

        assert_eq!(registry.most_aficionado(&"Latte").unwrap().id_typed(), b);
        assert_eq!(registry.most_aficionado(&"Mocha").unwrap().id_typed(), a);
    }

    #[test]
    fn registry_uses_its_factory() {
        let placed_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let order_id = OrderId::from_uuid(uuid::Uuid::nil());
        let mut registry: CustomerRegistry<&'static str, _> = CustomerRegistry::with_factory(
            move |customer_id: CustomerId, coffee: &'static str, price: Price| {
                Order::new(order_id, customer_id, coffee, price, placed_at)
            },
        );
        let alice = registry.register("Alice").unwrap();

        let order = registry.create_order(alice, "Latte", cents(300)).unwrap();
        assert_eq!(order.id(), &order_id);
        assert_eq!(order.placed_at(), placed_at);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        /// Reference: totals first, then the earliest customer at the positive maximum.
        fn expected_winner(orders_per_customer: &[Vec<(u8, i64)>], coffee: u8) -> Option<usize> {
            let totals: Vec<i64> = orders_per_customer
                .iter()
                .map(|orders| {
                    orders
                        .iter()
                        .filter(|(c, _)| *c == coffee)
                        .map(|(_, p)| *p)
                        .sum()
                })
                .collect();
            let max = totals.iter().copied().max()?;
            if max <= 0 {
                return None;
            }
            totals.iter().position(|t| *t == max)
        }

        proptest! {
            #[test]
            fn most_aficionado_matches_reference(
                orders_per_customer in prop::collection::vec(
                    prop::collection::vec((0u8..3, -20i64..50), 0..8),
                    0..10,
                ),
                coffee in 0u8..4,
            ) {
                let mut registry: CustomerRegistry<u8> = CustomerRegistry::new();
                let mut ids = Vec::new();
                for (idx, orders) in orders_per_customer.iter().enumerate() {
                    let id = registry.register(format!("c{idx}")).unwrap();
                    for (c, p) in orders {
                        registry.create_order(id, *c, Price::new(*p)).unwrap();
                    }
                    ids.push(id);
                }

                let actual = registry.most_aficionado(&coffee).map(|c| c.id_typed());
                let expected = expected_winner(&orders_per_customer, coffee).map(|i| ids[i]);
                prop_assert_eq!(actual, expected);
            }

            #[test]
            fn failed_registrations_leave_registry_unchanged(
                valid in prop::collection::vec("[a-z]{1,15}", 0..5),
                invalid in "[a-z]{16,30}",
            ) {
                let mut registry: CustomerRegistry<u8> = CustomerRegistry::new();
                for name in &valid {
                    registry.register(name.clone()).unwrap();
                }
                let before: Vec<CustomerId> =
                    registry.customers().iter().map(|c| c.id_typed()).collect();

                prop_assert!(registry.register(invalid).is_err());
                prop_assert!(registry.register("").is_err());

                let after: Vec<CustomerId> =
                    registry.customers().iter().map(|c| c.id_typed()).collect();
                prop_assert_eq!(before, after);
            }
        }
    }
}
