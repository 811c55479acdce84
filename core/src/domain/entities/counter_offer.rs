//! CounterOffer entity: a standing proposal against an offer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A proposal from a user against exactly one offer.
///
/// There is no status field: a counter-offer is "accepted" only in the sense
/// that a rental references it. Competing counter-offers for the same offer
/// are not invalidated when one of them becomes a rental.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterOffer {
    /// Store-assigned identifier; `None` until persisted
    pub id: Option<Uuid>,

    /// The offer this proposal targets
    pub offer: Uuid,

    /// The proposing user
    pub user: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Expiry timestamp
    pub expires: DateTime<Utc>,
}

impl CounterOffer {
    /// Creates a new, not-yet-persisted counter-offer
    pub fn new(offer: Uuid, user: Uuid, expires: DateTime<Utc>) -> Self {
        Self {
            id: None,
            offer,
            user,
            created_at: Utc::now(),
            expires,
        }
    }

    /// Whether the proposal is past its expiry at the given instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_counter_offer() {
        let offer_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let counter_offer = CounterOffer::new(offer_id, user_id, Utc::now() + Duration::days(7));

        assert_eq!(counter_offer.id, None);
        assert_eq!(counter_offer.offer, offer_id);
        assert_eq!(counter_offer.user, user_id);
        assert!(!counter_offer.is_expired(Utc::now()));
    }
}
