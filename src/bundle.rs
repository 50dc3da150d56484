// Priced combinations of offers and the upgrade lists derived from them
use crate::models::{Hotel, RoomType, Ticket, TransportOffer, VipPackage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BundleError {
    #[error("Room type '{room}' is not listed by hotel '{hotel}'")]
    RoomNotInHotel { hotel: String, room: String },
    #[error("{component} is priced in {found}, bundle is priced in {expected}")]
    CurrencyMismatch {
        component: &'static str,
        expected: String,
        found: String,
    },
}

// One priced combination of a ticket, a hotel room and optional VIP package and transport.
// Fields are private so that a bundle can only be assembled from a hotel's own
// room list and in one currency, either by the generator or by deserializing a
// record that passes the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BundleRecord")]
pub struct Bundle {
    ticket: Ticket,
    hotel: Hotel,
    room_type: RoomType,
    #[serde(skip_serializing_if = "Option::is_none")]
    vip_package: Option<VipPackage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transport: Option<TransportOffer>,
    total_cost: f64,
    currency: String,
    #[serde(rename = "isOfficialVIP")]
    is_official_vip: bool,
}

// Wire shape of a bundle before the room membership and currency checks
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRecord {
    ticket: Ticket,
    hotel: Hotel,
    room_type: RoomType,
    #[serde(default)]
    vip_package: Option<VipPackage>,
    #[serde(default)]
    transport: Option<TransportOffer>,
    total_cost: f64,
    currency: String,
}

impl TryFrom<BundleRecord> for Bundle {
    type Error = BundleError;

    fn try_from(record: BundleRecord) -> Result<Self, Self::Error> {
        if !record.hotel.lists_room(&record.room_type) {
            return Err(BundleError::RoomNotInHotel {
                hotel: record.hotel.name,
                room: record.room_type.name,
            });
        }

        let expected = record.currency.as_str();
        // An unpriced hotel's currency depends on engine configuration, so only
        // an explicit price range is checked.
        let priced = [
            ("ticket", Some(record.ticket.currency.as_str())),
            ("hotel", record.hotel.prices.as_ref().map(|p| p.currency.as_str())),
            ("VIP package", record.vip_package.as_ref().map(|v| v.currency.as_str())),
            ("transport", record.transport.as_ref().map(|t| t.currency.as_str())),
        ];

        for (component, currency) in priced {
            match currency {
                Some(found) if found != expected => {
                    return Err(BundleError::CurrencyMismatch {
                        component,
                        expected: expected.to_string(),
                        found: found.to_string(),
                    });
                }
                _ => {}
            }
        }

        let is_official_vip = record.vip_package.is_some();
        Ok(Bundle {
            ticket: record.ticket,
            hotel: record.hotel,
            room_type: record.room_type,
            vip_package: record.vip_package,
            transport: record.transport,
            total_cost: record.total_cost,
            currency: record.currency,
            is_official_vip,
        })
    }
}

impl Bundle {
    // `room` must come from `hotel.room_types`; the generator iterates the hotel's
    // own list so this holds for every bundle it emits.
    pub(crate) fn assemble(
        ticket: &Ticket,
        hotel: &Hotel,
        room: &RoomType,
        vip_package: Option<&VipPackage>,
        transport: Option<&TransportOffer>,
        nights: u64,
    ) -> Self {
        debug_assert!(hotel.lists_room(room), "room type must belong to its hotel");

        let mut total_cost = ticket.price;
        if let Some(vip) = vip_package {
            total_cost += vip.price;
        }
        total_cost += room.price * nights as f64;
        if let Some(offer) = transport {
            total_cost += offer.price;
        }

        Self {
            ticket: ticket.clone(),
            hotel: hotel.clone(),
            room_type: room.clone(),
            vip_package: vip_package.cloned(),
            transport: transport.cloned(),
            total_cost,
            currency: ticket.currency.clone(),
            is_official_vip: vip_package.is_some(),
        }
    }

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    pub fn room_type(&self) -> &RoomType {
        &self.room_type
    }

    pub fn vip_package(&self) -> Option<&VipPackage> {
        self.vip_package.as_ref()
    }

    pub fn transport(&self) -> Option<&TransportOffer> {
        self.transport.as_ref()
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn is_official_vip(&self) -> bool {
        self.is_official_vip
    }

    // Zero travelers is treated as a single traveler
    pub fn per_person_cost(&self, travelers: u32) -> f64 {
        self.total_cost / f64::from(travelers.max(1))
    }

    // Whether both bundles pick the same ticket, hotel, room and transport.
    // Hotels carry no identifier, so they are matched by name and rooms by
    // name within the hotel. VIP packages do not take part in the match.
    pub fn same_selection(&self, other: &Bundle) -> bool {
        self.ticket.id == other.ticket.id
            && self.hotel.name == other.hotel.name
            && self.room_type.name == other.room_type.name
            && self.transport.as_ref().map(|t| &t.id) == other.transport.as_ref().map(|t| &t.id)
    }
}

// Cheaper-and-better alternatives to a baseline, one list per axis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeAlternatives {
    pub tickets: Vec<Bundle>,
    pub transport: Vec<Bundle>,
    pub hotel_rooms: Vec<Bundle>,
}

impl UpgradeAlternatives {
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty() && self.transport.is_empty() && self.hotel_rooms.is_empty()
    }

    // Entries across all three lists; a bundle listed on two axes counts twice
    pub fn total(&self) -> usize {
        self.tickets.len() + self.transport.len() + self.hotel_rooms.len()
    }
}
