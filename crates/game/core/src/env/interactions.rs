//! Interaction tree oracle.

use crate::interaction::Interaction;

/// Read-only access to the interaction table.
pub trait InteractionOracle: Send + Sync {
    fn interaction(&self, interaction_id: &str) -> Option<&Interaction>;
}
