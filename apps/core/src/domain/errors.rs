use thiserror::Error;

use super::appointment::AppointmentStatus;

/// Failures the domain store reports to its callers
///
/// The messages are shown to end users as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("This account has been banned.")]
    AccountBanned,

    #[error("Your account is pending approval by an administrator.")]
    PendingApproval,

    #[error("An account with this email already exists.")]
    EmailAlreadyExists,

    #[error("{0}")]
    InvalidEmail(String),

    #[error("Cannot move appointment from {from} to {to}")]
    InvalidStatusTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
