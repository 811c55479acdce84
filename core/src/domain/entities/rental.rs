//! Rental entity: the realized agreement between an offer and a renter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The terminal state of the offer lifecycle.
///
/// At most one rental exists per offer; the rental repositories reject a
/// second insert for the same offer. Creating a rental does not delete or
/// flag the source counter-offer or offer — callers do any such bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    /// Store-assigned identifier; `None` until persisted
    pub id: Option<Uuid>,

    /// The rented offer
    pub offer: Uuid,

    /// The renting user
    pub user: Uuid,

    /// The counter-offer that led to this rental, if any
    pub counter_offer: Option<Uuid>,

    /// Start of the rental window
    pub start_date: DateTime<Utc>,

    /// End of the rental window
    pub expires: DateTime<Utc>,
}

impl Rental {
    /// Creates a new, not-yet-persisted rental
    pub fn new(
        offer: Uuid,
        user: Uuid,
        counter_offer: Option<Uuid>,
        start_date: DateTime<Utc>,
        expires: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            offer,
            user,
            counter_offer,
            start_date,
            expires,
        }
    }

    /// Whether the rental window is over at the given instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_rental() {
        let offer_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let counter_offer_id = Uuid::new_v4();
        let now = Utc::now();

        let rental = Rental::new(
            offer_id,
            user_id,
            Some(counter_offer_id),
            now,
            now + Duration::days(30),
        );

        assert_eq!(rental.id, None);
        assert_eq!(rental.offer, offer_id);
        assert_eq!(rental.counter_offer, Some(counter_offer_id));
        assert!(!rental.is_expired(now));
        assert!(rental.is_expired(now + Duration::days(31)));
    }
}
