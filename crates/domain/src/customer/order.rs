//! Order entity: one artwork reserved by one customer.

use chrono::{DateTime, Utc};
use common::{ArtworkId, CustomerId};

/// A purchase record.
///
/// The artwork is referenced by id only; the gallery checks that it exists
/// when the order is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    artwork_id: ArtworkId,
    order_date: DateTime<Utc>,
    /// Customer who placed the order; set when the gallery inserts it.
    customer: Option<CustomerId>,
}

impl Order {
    pub fn new(artwork_id: ArtworkId, order_date: DateTime<Utc>) -> Self {
        Self {
            artwork_id,
            order_date,
            customer: None,
        }
    }

    pub fn artwork_id(&self) -> ArtworkId {
        self.artwork_id
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    pub fn customer(&self) -> Option<CustomerId> {
        self.customer
    }

    /// Two orders are duplicates when they name the same artwork on the same
    /// date.
    pub fn is_duplicate_of(&self, other: &Order) -> bool {
        self.artwork_id == other.artwork_id && self.order_date == other.order_date
    }

    pub(crate) fn set_customer(&mut self, customer: CustomerId) {
        self.customer = Some(customer);
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID of Artwork: {}, Date of Order: {}",
            self.artwork_id,
            self.order_date.format("%Y-%m-%d %H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_duplicate_needs_same_artwork_and_date() {
        let date = Utc::now();
        let order = Order::new(ArtworkId::new(1), date);

        assert!(order.is_duplicate_of(&Order::new(ArtworkId::new(1), date)));
        assert!(!order.is_duplicate_of(&Order::new(ArtworkId::new(2), date)));
        assert!(!order.is_duplicate_of(&Order::new(
            ArtworkId::new(1),
            date + Duration::seconds(1)
        )));
    }

    #[test]
    fn test_duplicate_ignores_customer() {
        let date = Utc::now();
        let mut placed = Order::new(ArtworkId::new(1), date);
        placed.set_customer(CustomerId::new(4));
        assert!(placed.is_duplicate_of(&Order::new(ArtworkId::new(1), date)));
    }

    #[test]
    fn test_display() {
        let date = DateTime::parse_from_rfc3339("2026-05-04T13:20:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let order = Order::new(ArtworkId::new(12), date);
        assert_eq!(
            order.to_string(),
            "ID of Artwork: 12, Date of Order: 2026-05-04 13:20"
        );
    }
}
