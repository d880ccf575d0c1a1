use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Physical shop a barber works out of
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub name: String,
    pub address: String,
    pub location: Coordinates,
}

/// A bookable offering on a barber's profile
///
/// # Invariants
/// - `price` is never negative
/// - `duration` is at least one minute
/// - `id` stays the same across edits so appointments keep resolving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    id: String,
    name: String,
    price: Decimal,
    duration: u32,
}

impl Service {
    /// Creates a new service with a generated `s-…` id
    ///
    /// # Returns
    /// * `Ok(Service)` - If price and duration are valid
    /// * `Err(String)` - If price is negative or duration is zero
    pub fn new(name: impl Into<String>, price: Decimal, duration: u32) -> Result<Self, String> {
        Self::with_id(format!("s-{}", Uuid::new_v4()), name, price, duration)
    }

    /// Creates a service under a known id
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        duration: u32,
    ) -> Result<Self, String> {
        Self::validate(price, duration)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            price,
            duration,
        })
    }

    /// The blank row a barber gets when adding a service in the editor
    pub fn placeholder() -> Self {
        Self {
            id: format!("s-{}", Uuid::new_v4()),
            name: "New Service".to_string(),
            price: Decimal::ZERO,
            duration: 30,
        }
    }

    /// Returns a copy with new details and the same id
    pub fn edited(&self, name: impl Into<String>, price: Decimal, duration: u32) -> Result<Self, String> {
        Self::with_id(self.id.clone(), name, price, duration)
    }

    /// Reconstructs a service from already-validated data
    ///
    /// # Note
    /// Bypasses validation; only for seed data and deserialized records.
    pub fn from_persistence(id: impl Into<String>, name: impl Into<String>, price: Decimal, duration: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            duration,
        }
    }

    fn validate(price: Decimal, duration: u32) -> Result<(), String> {
        if price < Decimal::ZERO {
            return Err("Price cannot be negative".to_string());
        }
        if duration == 0 {
            return Err("Duration must be at least one minute".to_string());
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Duration in minutes
    pub fn duration(&self) -> u32 {
        self.duration
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A showcase entry in a barber's portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl PortfolioItem {
    /// Creates a new item with a generated `p-…` id
    pub fn new(kind: MediaKind, url: impl Into<String>, caption: Option<String>) -> Self {
        Self {
            id: format!("p-{}", Uuid::new_v4()),
            kind,
            url: url.into(),
            caption,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_with_valid_values() {
        let service = Service::new("Classic Cut", Decimal::from(30), 30).unwrap();

        assert!(service.id().starts_with("s-"));
        assert_eq!(service.name(), "Classic Cut");
        assert_eq!(service.price(), Decimal::from(30));
        assert_eq!(service.duration(), 30);
    }

    #[test]
    fn free_service_is_allowed() {
        assert!(Service::new("Consultation", Decimal::ZERO, 10).is_ok());
    }

    #[test]
    fn negative_price_fails() {
        let result = Service::new("Cut", Decimal::from(-5), 30);
        assert!(result.unwrap_err().contains("Price cannot be negative"));
    }

    #[test]
    fn zero_duration_fails() {
        let result = Service::new("Cut", Decimal::from(5), 0);
        assert!(result.unwrap_err().contains("Duration"));
    }

    #[test]
    fn edit_keeps_service_id() {
        let original = Service::with_id("s1-1", "Classic Cut", Decimal::from(30), 30).unwrap();
        let edited = original.edited("Premium Cut", Decimal::from(45), 40).unwrap();

        assert_eq!(edited.id(), "s1-1");
        assert_eq!(edited.name(), "Premium Cut");
        assert_eq!(edited.duration(), 40);
    }

    #[test]
    fn placeholder_defaults() {
        let service = Service::placeholder();
        assert_eq!(service.name(), "New Service");
        assert_eq!(service.price(), Decimal::ZERO);
        assert_eq!(service.duration(), 30);
    }

    #[test]
    fn portfolio_item_serializes_kind_as_type() {
        let item = PortfolioItem::new(MediaKind::Video, "https://x/clip.mp4", None);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["type"], "video");
        assert!(json.get("caption").is_none());
        assert!(item.id.starts_with("p-"));
    }
}
