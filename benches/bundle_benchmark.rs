use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{seq::SliceRandom, thread_rng, Rng};
use trip_bundle_engine::{
    ComparisonEngine, Hotel, LocalComparisonEngine, RoomType, Ticket, TicketType, TransportMode,
    TransportOffer, TripInput, VipPackage,
};

const CURRENCIES: [&str; 2] = ["USD", "EUR"];
const ROOM_NAMES: [&str; 5] = ["Double", "Superior Twin", "Deluxe King", "Junior Suite", "Queen"];
const CLASS_LABELS: [&str; 4] = ["Economy", "Premium Economy", "Business", "Coach"];

// Random trip with `size` offers of each kind
fn random_trip(size: usize) -> TripInput {
    let mut rng = thread_rng();

    let tickets = (0..size)
        .map(|i| {
            let ticket_type = if rng.gen_bool(0.3) {
                TicketType::Vip
            } else {
                TicketType::Standard
            };
            let price = rng.gen_range(50.0..400.0);
            Ticket::new(i as u64, "Ticket", ticket_type, price, CURRENCIES.choose(&mut rng).unwrap())
        })
        .collect();

    let hotels = (0..size)
        .map(|i| {
            let stars = f64::from(rng.gen_range(2..=10u8)) / 2.0;
            let mut hotel = Hotel::new(&format!("hotel{}", i), "US", "Chicago").with_star_rating(stars);
            for _ in 0..rng.gen_range(1..4) {
                let price = rng.gen_range(60.0..500.0);
                hotel = hotel.with_room(RoomType::new(ROOM_NAMES.choose(&mut rng).unwrap(), price));
            }
            hotel.with_currency(CURRENCIES.choose(&mut rng).unwrap())
        })
        .collect();

    let vip_packages = (0..size / 2)
        .map(|i| {
            let price = rng.gen_range(100.0..900.0);
            VipPackage::new(i as u64, "Package", price, CURRENCIES.choose(&mut rng).unwrap())
        })
        .collect();

    let transport_offers = (0..size)
        .map(|i| {
            let label = CLASS_LABELS.choose(&mut rng).unwrap();
            let price = rng.gen_range(40.0..900.0);
            let currency = CURRENCIES.choose(&mut rng).unwrap();
            TransportOffer::new(&format!("t{}", i), TransportMode::Plane, "Airline", label, price, currency)
        })
        .collect();

    TripInput {
        event_name: "Benchmark Tour".to_string(),
        event_city: "Chicago".to_string(),
        concert_date: "2025-08-22".to_string(),
        travelers: 2,
        days_before: 1,
        days_after: 1,
        tickets,
        hotels,
        vip_packages,
        transport_offers,
    }
}

pub fn bundle_benchmark(c: &mut Criterion) {
    let engine = LocalComparisonEngine::default();
    let mut group = c.benchmark_group("trip_bundles");

    for size in [2, 4, 8].iter() {
        let trip = random_trip(*size);
        group.bench_with_input(BenchmarkId::new("generate", size), &trip, |b, trip| {
            b.iter(|| black_box(engine.generate(trip)))
        });

        let bundles = engine.generate(&trip);
        if let Some(baseline) = bundles.first() {
            group.bench_with_input(BenchmarkId::new("detect_upgrades", size), &bundles, |b, bundles| {
                b.iter(|| black_box(engine.detect_upgrades(baseline, bundles)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bundle_benchmark);
criterion_main!(benches);
