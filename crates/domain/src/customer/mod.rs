//! Customer entity, orders, and related types.

mod entity;
mod order;

pub use entity::Customer;
pub use order::Order;

use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    /// Name is empty after trimming.
    #[error("Name is blank")]
    BlankName,

    /// Name exceeds the character limit.
    #[error("Name length is too long by {overflow} characters")]
    BadName { overflow: usize },
}
