use super::value_objects::{Coordinates, PortfolioItem, Service, Shop};
use serde::{Deserialize, Serialize};

/// Where a new barber's shop is placed until they edit it
pub const DEFAULT_SHOP_LOCATION: Coordinates = Coordinates {
    lat: 40.7128,
    lng: -74.0060,
};

/// Public profile of a barber, one per barber account
///
/// Profiles are edited by cloning one out of the store, changing the clone
/// and handing the whole value back. Dropping the clone discards the edit.
///
/// # Example
/// ```
/// use barberbook_core::domain::barber::{BarberProfile, Service};
///
/// let mut draft = BarberProfile::placeholder("user-1", "Sam");
/// draft.add_service(Service::placeholder());
/// assert_eq!(draft.services.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarberProfile {
    pub user_id: String,
    pub bio: String,
    pub services: Vec<Service>,
    pub portfolio: Vec<PortfolioItem>,
    pub profile_picture_url: String,
    pub shop: Shop,
}

impl BarberProfile {
    /// Starter profile created alongside a newly registered barber
    pub fn placeholder(user_id: impl Into<String>, barber_name: &str) -> Self {
        let user_id = user_id.into();
        Self {
            profile_picture_url: format!("https://picsum.photos/seed/{}/400", user_id),
            user_id,
            bio: "New barber ready to provide great haircuts!".to_string(),
            services: Vec::new(),
            portfolio: Vec::new(),
            shop: Shop {
                name: format!("{}'s Shop", barber_name),
                address: "Please update your address".to_string(),
                location: DEFAULT_SHOP_LOCATION,
            },
        }
    }

    pub fn service(&self, service_id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id() == service_id)
    }

    /// Appends a service, keeping display order
    pub fn add_service(&mut self, service: Service) {
        self.services.push(service);
    }

    /// Replaces the service with the same id in place
    ///
    /// Returns false when no service has that id.
    pub fn update_service(&mut self, service: Service) -> bool {
        match self.services.iter_mut().find(|s| s.id() == service.id()) {
            Some(slot) => {
                *slot = service;
                true
            }
            None => false,
        }
    }

    pub fn remove_service(&mut self, service_id: &str) {
        self.services.retain(|s| s.id() != service_id);
    }

    pub fn add_portfolio_item(&mut self, item: PortfolioItem) {
        self.portfolio.push(item);
    }

    pub fn remove_portfolio_item(&mut self, item_id: &str) {
        self.portfolio.retain(|p| p.id != item_id);
    }
}
