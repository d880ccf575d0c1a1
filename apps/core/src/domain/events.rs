use super::appointment::AppointmentStatus;
use super::user::{ModerationFlags, Role};
use super::Theme;

/// Changes committed by the domain store
///
/// Every successful mutation publishes exactly one of these to all
/// subscribers. Operations that hit an unknown id publish nothing.
///
/// # Example
/// ```
/// use barberbook_core::domain::events::StoreEvent;
/// use barberbook_core::domain::user::Role;
///
/// let event = StoreEvent::UserRegistered {
///     user_id: "user-1".to_string(),
///     role: Role::Client,
/// };
/// assert_eq!(event.kind(), "user_registered");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A new account (and, for barbers, its profile) was created
    UserRegistered {
        user_id: String,
        role: Role,
    },
    /// A user signed in and became the current session
    SessionStarted {
        user_id: String,
    },
    /// The current session was cleared
    SessionEnded,
    /// A client booked an appointment
    AppointmentRecorded {
        appointment_id: String,
        barber_id: String,
    },
    /// An administrator changed ban/approval flags
    ModerationFlagsChanged {
        user_id: String,
        flags: ModerationFlags,
    },
    /// A barber saved a new version of their profile
    ProfileReplaced {
        user_id: String,
    },
    /// A client rated a visit
    AppointmentRated {
        appointment_id: String,
        barber_id: String,
    },
    /// An appointment moved to a new status
    AppointmentStatusChanged {
        appointment_id: String,
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
    /// The theme preference flipped
    ThemeChanged {
        theme: Theme,
    },
}

impl StoreEvent {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            StoreEvent::UserRegistered { .. } => "user_registered",
            StoreEvent::SessionStarted { .. } => "session_started",
            StoreEvent::SessionEnded => "session_ended",
            StoreEvent::AppointmentRecorded { .. } => "appointment_recorded",
            StoreEvent::ModerationFlagsChanged { .. } => "moderation_flags_changed",
            StoreEvent::ProfileReplaced { .. } => "profile_replaced",
            StoreEvent::AppointmentRated { .. } => "appointment_rated",
            StoreEvent::AppointmentStatusChanged { .. } => "appointment_status_changed",
            StoreEvent::ThemeChanged { .. } => "theme_changed",
        }
    }

    /// The account whose view changes with this event
    ///
    /// Account events name the account itself. Booking and rating events
    /// name the barber, since they move that barber's schedule and rating.
    pub fn subject_user_id(&self) -> Option<&str> {
        match self {
            StoreEvent::UserRegistered { user_id, .. }
            | StoreEvent::SessionStarted { user_id }
            | StoreEvent::ModerationFlagsChanged { user_id, .. }
            | StoreEvent::ProfileReplaced { user_id } => Some(user_id),
            StoreEvent::AppointmentRecorded { barber_id, .. }
            | StoreEvent::AppointmentRated { barber_id, .. } => Some(barber_id),
            _ => None,
        }
    }
}
