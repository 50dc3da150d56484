// Upgrade detection: cheaper and better alternatives on one axis at a time
use crate::bundle::{Bundle, UpgradeAlternatives};
use crate::quality::{room_quality, ticket_quality, transport_quality, DEFAULT_STAR_RATING};
use tracing::debug;

pub struct UpgradeDetector {
    default_star_rating: f64,
}

impl UpgradeDetector {
    pub fn new(default_star_rating: f64) -> Self {
        Self {
            default_star_rating,
        }
    }

    // Finds bundles that beat `baseline` on exactly one axis.
    // A candidate qualifies on an axis when that axis scores strictly higher
    // and its own price component is strictly lower, while the components of
    // the other axes are the same as the baseline's. A candidate can qualify on
    // several axes and is then listed under each. Lists keep the order of
    // `all_bundles`.
    pub fn detect(&self, baseline: &Bundle, all_bundles: &[Bundle]) -> UpgradeAlternatives {
        let mut upgrades = UpgradeAlternatives::default();

        let base_ticket = ticket_quality(baseline.ticket().ticket_type);
        let base_room = self.room_score(baseline);

        for candidate in all_bundles {
            if candidate.same_selection(baseline) {
                continue;
            }

            let same_hotel = candidate.hotel().name == baseline.hotel().name;
            let same_room = same_hotel && candidate.room_type().name == baseline.room_type().name;
            let same_ticket = candidate.ticket().id == baseline.ticket().id;

            if same_room
                && ticket_quality(candidate.ticket().ticket_type) > base_ticket
                && candidate.ticket().price < baseline.ticket().price
            {
                upgrades.tickets.push(candidate.clone());
            }

            if let (Some(base_offer), Some(offer)) = (baseline.transport(), candidate.transport()) {
                if same_ticket
                    && same_room
                    && transport_quality(&offer.class_label) > transport_quality(&base_offer.class_label)
                    && offer.price < base_offer.price
                {
                    upgrades.transport.push(candidate.clone());
                }
            }

            if same_ticket
                && same_hotel
                && self.room_score(candidate) > base_room
                && candidate.room_type().price < baseline.room_type().price
            {
                upgrades.hotel_rooms.push(candidate.clone());
            }
        }

        debug!(
            candidates = all_bundles.len(),
            ticket_upgrades = upgrades.tickets.len(),
            transport_upgrades = upgrades.transport.len(),
            room_upgrades = upgrades.hotel_rooms.len(),
            "detected upgrades"
        );

        upgrades
    }

    fn room_score(&self, bundle: &Bundle) -> f64 {
        room_quality(
            &bundle.room_type().name,
            bundle.hotel().star_rating,
            self.default_star_rating,
        )
    }
}

impl Default for UpgradeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_STAR_RATING)
    }
}
