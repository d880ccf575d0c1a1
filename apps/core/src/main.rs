use barberbook_core::api::{authorize, discover_barbers, Route};
use barberbook_core::config::StoreConfig;
use barberbook_core::domain::barber::Coordinates;
use barberbook_core::ranking::SortKey;
use barberbook_core::store::DomainStore;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = StoreConfig::from_env()?;
    let store = DomainStore::open(config).await;
    tracing::info!(theme = %store.theme(), "Store ready");

    // Optional sign-in
    if let (Ok(email), Ok(password)) = (env::var("BARBERBOOK_EMAIL"), env::var("BARBERBOOK_PASSWORD")) {
        match store.authenticate(&email, &password).await {
            Ok(user) => tracing::info!(user_id = %user.id(), role = %user.role(), "Signed in"),
            Err(e) => tracing::warn!(error = %e, "Sign-in failed"),
        }
    }

    let current_user = store.current_user();
    tracing::info!(access = ?authorize(current_user.as_ref(), &Route::Home), "Home route");

    let location = match (env::var("BARBERBOOK_LAT"), env::var("BARBERBOOK_LNG")) {
        (Ok(lat), Ok(lng)) => Some(Coordinates::new(lat.trim().parse()?, lng.trim().parse()?)),
        _ => None,
    };
    let sort = match env::var("BARBERBOOK_SORT") {
        Ok(value) => value.parse::<SortKey>()?,
        Err(_) => SortKey::default(),
    };

    let snapshot = store.snapshot();
    for (rank, listing) in discover_barbers(&snapshot, location, sort).iter().enumerate() {
        tracing::info!(
            rank = rank + 1,
            barber = %listing.user.name(),
            rating = listing.rating.average,
            reviews = listing.rating.count,
            distance_km = ?listing.distance_km,
            "Barber listing"
        );
    }

    Ok(())
}
