//! Shared traits for list entries.

use uuid::Uuid;

/// Exposes a stable identifier for records shown in a transactions list.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving signed amounts.
///
/// Income is positive, expenses are negative.
pub trait Amounted {
    fn signed_amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}
