// Bundle generation: every currency-compatible ticket / hotel room / VIP / transport combination
use crate::bundle::Bundle;
use crate::models::{Hotel, Ticket, TransportOffer, TripInput, VipPackage, DEFAULT_HOTEL_CURRENCY};
use tracing::debug;

pub struct BundleGenerator {
    default_hotel_currency: String,
}

impl BundleGenerator {
    pub fn new(default_hotel_currency: &str) -> Self {
        Self {
            default_hotel_currency: default_hotel_currency.to_string(),
        }
    }

    // Builds every bundle the trip allows.
    // Official VIP bundles come first, grouped by package, then ticket, hotel
    // and room. The plain ticket and hotel bundles follow in the same order.
    // Each combination is emitted without transport and then once per
    // transport offer in the ticket's currency.
    pub fn generate(&self, trip: &TripInput) -> Vec<Bundle> {
        let nights = trip.nights();
        let mut bundles = Vec::new();

        for vip in &trip.vip_packages {
            for ticket in &trip.tickets {
                if ticket.currency != vip.currency {
                    continue;
                }
                self.push_combinations(&mut bundles, ticket, Some(vip), trip, nights);
            }
        }
        let vip_count = bundles.len();

        for ticket in &trip.tickets {
            self.push_combinations(&mut bundles, ticket, None, trip, nights);
        }

        debug!(
            nights,
            vip_bundles = vip_count,
            standard_bundles = bundles.len() - vip_count,
            "generated bundles for {}",
            trip.event_name
        );

        bundles
    }

    // One ticket (and optional VIP package) across every matching hotel room
    fn push_combinations(
        &self,
        bundles: &mut Vec<Bundle>,
        ticket: &Ticket,
        vip: Option<&VipPackage>,
        trip: &TripInput,
        nights: u64,
    ) {
        for hotel in trip.hotels.iter().filter(|h| self.currency_matches(h, ticket)) {
            for room in &hotel.room_types {
                bundles.push(Bundle::assemble(ticket, hotel, room, vip, None, nights));

                for offer in matching_transport(&trip.transport_offers, ticket) {
                    bundles.push(Bundle::assemble(ticket, hotel, room, vip, Some(offer), nights));
                }
            }
        }
    }

    fn currency_matches(&self, hotel: &Hotel, ticket: &Ticket) -> bool {
        hotel.effective_currency(&self.default_hotel_currency) == ticket.currency
    }
}

impl Default for BundleGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_HOTEL_CURRENCY)
    }
}

fn matching_transport<'a>(
    offers: &'a [TransportOffer],
    ticket: &'a Ticket,
) -> impl Iterator<Item = &'a TransportOffer> {
    offers.iter().filter(move |o| o.currency == ticket.currency)
}
