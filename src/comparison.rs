// Saved comparison record handed to the persistence layer
use crate::bundle::{Bundle, UpgradeAlternatives};
use crate::models::{Hotel, Ticket, TripInput, TripInputError, VipPackage};
use crate::travel_window::TravelWindow;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ComparisonError {
    #[error("Invalid trip: {0}")]
    InvalidTrip(#[from] TripInputError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRecord {
    // "<event name> - <event city>"
    pub event: String,
    pub travel_window: TravelWindow,
    pub travelers: u32,
    pub ticket_sources: Vec<Ticket>,
    pub hotels: Vec<Hotel>,
    pub vip_package_options: Vec<VipPackage>,
    pub user_choice: Bundle,
    pub upgrade_alternatives: UpgradeAlternatives,
    #[serde(rename = "foundVIPPackage")]
    pub found_vip_package: bool,
}

impl ComparisonRecord {
    pub fn new(
        trip: &TripInput,
        baseline: &Bundle,
        upgrades: &UpgradeAlternatives,
    ) -> Result<Self, ComparisonError> {
        let travel_window = TravelWindow::from_trip(trip)?;

        if !trip.tickets.iter().any(|t| t.id == baseline.ticket().id) {
            warn!(
                ticket_id = baseline.ticket().id,
                "baseline ticket is not among the trip's ticket sources"
            );
        }

        Ok(Self {
            event: format!("{} - {}", trip.event_name, trip.event_city),
            travel_window,
            travelers: trip.travelers,
            ticket_sources: trip.tickets.clone(),
            hotels: trip.hotels.clone(),
            vip_package_options: trip.vip_packages.clone(),
            user_choice: baseline.clone(),
            upgrade_alternatives: upgrades.clone(),
            found_vip_package: !trip.vip_packages.is_empty(),
        })
    }

    pub fn to_json(&self) -> Result<String, ComparisonError> {
        serde_json::to_string(self).map_err(|e| ComparisonError::Serialization(e.to_string()))
    }

    pub fn from_json(json_str: &str) -> Result<Self, ComparisonError> {
        serde_json::from_str(json_str).map_err(|e| ComparisonError::Serialization(e.to_string()))
    }
}
