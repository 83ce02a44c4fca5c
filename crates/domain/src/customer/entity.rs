//! Customer entity implementation.

use std::collections::BTreeMap;

use common::{ArtworkId, OrderId};

use super::{CustomerError, Order};
use crate::validation::{NameCheck, check_name};

/// A customer and the orders they have placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    orders: BTreeMap<OrderId, Order>,
}

impl Customer {
    /// Creates a customer with no orders.
    pub fn new(name: &str) -> Result<Self, CustomerError> {
        Self::restore(name, BTreeMap::new())
    }

    pub(crate) fn restore(
        name: &str,
        orders: BTreeMap<OrderId, Order>,
    ) -> Result<Self, CustomerError> {
        let mut customer = Self {
            name: String::new(),
            orders,
        };
        if !customer.update_name(name)? {
            return Err(CustomerError::BlankName);
        }
        Ok(customer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the orders in id order.
    pub fn orders(&self) -> impl Iterator<Item = (OrderId, &Order)> {
        self.orders.iter().map(|(id, order)| (*id, order))
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn find_order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// First order (in id order) for the given artwork.
    pub fn find_order_by_artwork_id(&self, artwork_id: ArtworkId) -> Option<(OrderId, &Order)> {
        self.orders().find(|(_, order)| order.artwork_id() == artwork_id)
    }

    /// Returns the id of an existing order with the same content as `order`.
    pub fn check_duplicates(&self, order: &Order) -> Option<OrderId> {
        self.orders()
            .find(|(_, existing)| existing.is_duplicate_of(order))
            .map(|(id, _)| id)
    }

    /// Returns true if both customers have the same name.
    pub fn is_duplicate_of(&self, other: &Customer) -> bool {
        self.name == other.name
    }

    /// Replaces the name with the trimmed `name`.
    ///
    /// Returns false without changing anything when the text is blank.
    pub fn update_name(&mut self, name: &str) -> Result<bool, CustomerError> {
        match check_name(name) {
            NameCheck::Blank => Ok(false),
            NameCheck::TooLong { overflow } => Err(CustomerError::BadName { overflow }),
            NameCheck::Valid(name) => {
                self.name = name.to_string();
                Ok(true)
            }
        }
    }

    pub(crate) fn add_order(&mut self, id: OrderId, order: Order) {
        self.orders.insert(id, order);
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}, Number of Orders: {}",
            self.name,
            self.orders.len()
        )
    }
}
