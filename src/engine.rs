// Comparison engine seam used by presentation, persistence and test code
use crate::bundle::{Bundle, UpgradeAlternatives};
use crate::generator::BundleGenerator;
use crate::models::{TripInput, DEFAULT_HOTEL_CURRENCY};
use crate::quality::DEFAULT_STAR_RATING;
use crate::upgrades::UpgradeDetector;
use serde::{Deserialize, Serialize};

// Engine configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    // Currency assumed for hotels without a price range
    pub default_hotel_currency: String,
    // Star rating assumed for unrated hotels when scoring rooms
    pub default_star_rating: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_hotel_currency: DEFAULT_HOTEL_CURRENCY.to_string(),
            default_star_rating: DEFAULT_STAR_RATING,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}

// Bundle generation and upgrade detection behind one interface.
// Both operations are pure: inputs are only read and every call returns
// freshly built collections.
pub trait ComparisonEngine: Send + Sync {
    fn generate(&self, trip: &TripInput) -> Vec<Bundle>;

    fn detect_upgrades(&self, baseline: &Bundle, all_bundles: &[Bundle]) -> UpgradeAlternatives;
}

pub struct LocalComparisonEngine {
    generator: BundleGenerator,
    detector: UpgradeDetector,
}

impl LocalComparisonEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            generator: BundleGenerator::new(&config.default_hotel_currency),
            detector: UpgradeDetector::new(config.default_star_rating),
        }
    }
}

impl Default for LocalComparisonEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ComparisonEngine for LocalComparisonEngine {
    fn generate(&self, trip: &TripInput) -> Vec<Bundle> {
        self.generator.generate(trip)
    }

    fn detect_upgrades(&self, baseline: &Bundle, all_bundles: &[Bundle]) -> UpgradeAlternatives {
        self.detector.detect(baseline, all_bundles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Hotel, RoomType, Ticket, TicketType};
    use std::sync::Arc;
    use std::thread;

    fn trip() -> TripInput {
        TripInput {
            event_name: "Summer Tour".to_string(),
            event_city: "Austin".to_string(),
            concert_date: "2025-07-12".to_string(),
            tickets: vec![
                Ticket::new(1, "GA", TicketType::Standard, 100.0, "GBP"),
                Ticket::new(2, "Floor VIP", TicketType::Vip, 90.0, "GBP"),
            ],
            hotels: vec![Hotel::new("The Grand", "GB", "London")
                .with_room(RoomType::new("Double", 120.0))
                .with_room(RoomType::new("Junior Suite", 110.0))],
            ..Default::default()
        }
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{"defaultHotelCurrency": "GBP"}"#).unwrap();
        assert_eq!(config.default_hotel_currency, "GBP");
        assert_eq!(config.default_star_rating, DEFAULT_STAR_RATING);
    }

    #[test]
    fn test_default_currency_is_configurable() {
        assert!(LocalComparisonEngine::default().generate(&trip()).is_empty());

        let engine = LocalComparisonEngine::new(EngineConfig {
            default_hotel_currency: "GBP".to_string(),
            ..Default::default()
        });
        assert_eq!(engine.generate(&trip()).len(), 4);
    }

    #[test]
    fn test_default_star_rating_only_affects_scoring() {
        let engine = LocalComparisonEngine::new(EngineConfig {
            default_hotel_currency: "GBP".to_string(),
            default_star_rating: 4.0,
        });
        let bundles = engine.generate(&trip());
        let baseline = bundles
            .iter()
            .find(|b| b.ticket().id == 1 && b.room_type().name == "Double")
            .unwrap();

        let upgrades = engine.detect_upgrades(baseline, &bundles);
        assert_eq!(upgrades.tickets.len(), 1);
        assert_eq!(upgrades.hotel_rooms.len(), 1);
        assert_eq!(upgrades.hotel_rooms[0].room_type().name, "Junior Suite");
    }

    #[test]
    fn test_engine_shared_across_threads() {
        let engine: Arc<dyn ComparisonEngine> = Arc::new(LocalComparisonEngine::new(EngineConfig {
            default_hotel_currency: "GBP".to_string(),
            ..Default::default()
        }));
        let trip = Arc::new(trip());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                let trip = Arc::clone(&trip);
                thread::spawn(move || engine.generate(&trip).len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 4);
        }
    }
}
