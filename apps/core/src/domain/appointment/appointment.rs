use super::value_objects::{AppointmentStatus, Rating};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A booking of one service from one barber by one client
///
/// # Invariants
/// - New bookings always start as `Scheduled`
/// - `rating` is within 1..=5 by construction of [`Rating`]
/// - The client/barber/service references are not checked against the
///   user and profile tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub client_id: String,
    pub barber_id: String,
    pub service_id: String,
    pub date: DateTime<Utc>,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

impl Appointment {
    /// Creates a `Scheduled` booking with a generated `appt-…` id
    pub fn book(
        client_id: impl Into<String>,
        barber_id: impl Into<String>,
        service_id: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("appt-{}", Uuid::new_v4()),
            client_id: client_id.into(),
            barber_id: barber_id.into(),
            service_id: service_id.into(),
            date,
            status: AppointmentStatus::Scheduled,
            rating: None,
            review: None,
        }
    }

    /// Overwrites rating and review
    ///
    /// The status is not checked here; the client UI only offers rating on
    /// completed visits.
    pub fn rate(&mut self, rating: Rating, review: impl Into<String>) {
        self.rating = Some(rating);
        self.review = Some(review.into());
    }

    /// Moves to the next status
    ///
    /// # Returns
    /// * `Ok(previous)` - The status before the change
    /// * `Err(previous)` - If the transition is not allowed
    pub fn transition_to(&mut self, next: AppointmentStatus) -> Result<AppointmentStatus, AppointmentStatus> {
        let previous = self.status;
        if !previous.can_transition_to(next) {
            return Err(previous);
        }
        self.status = next;
        Ok(previous)
    }

    /// Completed and carrying a rating, i.e. counted in a barber's average
    pub fn counts_toward_rating(&self) -> bool {
        self.status == AppointmentStatus::Completed && self.rating.is_some()
    }
}
