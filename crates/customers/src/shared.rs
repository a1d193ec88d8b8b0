//! Thread-safe handle around a [`CustomerRegistry`].

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use coffeeshop_core::{CustomerId, DomainError, DomainResult};

use crate::customer::Customer;
use crate::order::{Order, OrderFactory, SystemOrderFactory};
use crate::price::Price;
use crate::registry::CustomerRegistry;

/// Cloneable handle sharing one registry between threads.
///
/// A single lock guards both customer registration and order placement, so
/// readers never see a half-appended order. Reads hand back owned clones.
pub struct SharedCustomerRegistry<P, F = SystemOrderFactory> {
    inner: Arc<RwLock<CustomerRegistry<P, F>>>,
}

impl<P, F> Clone for SharedCustomerRegistry<P, F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> SharedCustomerRegistry<P> {
    pub fn new() -> Self {
        Self::from_registry(CustomerRegistry::new())
    }
}

impl<P> Default for SharedCustomerRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, F> SharedCustomerRegistry<P, F> {
    pub fn from_registry(registry: CustomerRegistry<P, F>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, CustomerRegistry<P, F>>> {
        self.inner
            .read()
            .map_err(|_| DomainError::conflict("lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, CustomerRegistry<P, F>>> {
        self.inner
            .write()
            .map_err(|_| DomainError::conflict("lock poisoned"))
    }

    pub fn register(&self, name: impl Into<String>) -> DomainResult<CustomerId> {
        self.write()?.register(name)
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.read()?.is_empty())
    }
}

impl<P: Clone, F> SharedCustomerRegistry<P, F> {
    pub fn customer(&self, id: CustomerId) -> DomainResult<Customer<P>> {
        self.read()?.customer(id).cloned()
    }

    /// Copy of every customer, in registration order.
    pub fn snapshot(&self) -> DomainResult<Vec<Customer<P>>> {
        Ok(self.read()?.customers().to_vec())
    }
}

impl<P: Clone, F: OrderFactory<P>> SharedCustomerRegistry<P, F> {
    pub fn create_order(
        &self,
        customer_id: CustomerId,
        coffee: P,
        price: Price,
    ) -> DomainResult<Order<P>> {
        let mut registry = self.write()?;
        registry.create_order(customer_id, coffee, price).cloned()
    }
}

impl<P: Clone + PartialEq, F> SharedCustomerRegistry<P, F> {
    pub fn most_aficionado(&self, coffee: &P) -> DomainResult<Option<Customer<P>>> {
        Ok(self.read()?.most_aficionado(coffee).cloned())
    }
}

impl<P: core::fmt::Debug, F> core::fmt::Debug for SharedCustomerRegistry<P, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedCustomerRegistry")
            .field("inner", &self.inner)
            .finish()
    }
}
