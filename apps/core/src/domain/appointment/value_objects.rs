use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the lifecycle status of an appointment
///
/// # Status Transitions
/// ```text
/// Scheduled -> Completed
///          \-> Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    /// Booked and not yet happened
    Scheduled,
    /// Visit took place; the client may rate it
    Completed,
    /// Called off before the visit
    Cancelled,
}

impl AppointmentStatus {
    /// Checks if a transition from current status to next status is valid
    ///
    /// # Valid Transitions
    /// - Scheduled -> Completed
    /// - Scheduled -> Cancelled
    ///
    /// # Example
    /// ```
    /// use barberbook_core::domain::appointment::AppointmentStatus;
    ///
    /// assert!(AppointmentStatus::Scheduled.can_transition_to(AppointmentStatus::Completed));
    /// assert!(!AppointmentStatus::Cancelled.can_transition_to(AppointmentStatus::Completed));
    /// ```
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        use AppointmentStatus::*;
        matches!((self, next), (Scheduled, Completed) | (Scheduled, Cancelled))
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "Scheduled"),
            AppointmentStatus::Completed => write!(f, "Completed"),
            AppointmentStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Star rating a client gives a completed visit
///
/// # Invariants
/// - Always between 1 and 5 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// # Example
    /// ```
    /// use barberbook_core::domain::appointment::Rating;
    ///
    /// assert_eq!(Rating::new(4).unwrap().stars(), 4);
    /// assert!(Rating::new(0).is_err());
    /// ```
    pub fn new(stars: u8) -> Result<Self, String> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Rating(stars))
        } else {
            Err(format!("Rating must be between {} and {}, got {}", Self::MIN, Self::MAX, stars))
        }
    }

    pub fn stars(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}
