use serde::{Deserialize, Serialize};

use crate::domain::appointment::Appointment;
use crate::domain::barber::BarberProfile;
use crate::domain::user::{Role, User};

/// Owned copy of every collection the store holds
///
/// Lookups here never fail: name resolution falls back to an `Unknown …`
/// label so callers can always display something.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub users: Vec<User>,
    pub barber_profiles: Vec<BarberProfile>,
    pub appointments: Vec<Appointment>,
}

impl StoreSnapshot {
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id() == id)
    }

    pub fn barber_profile(&self, user_id: &str) -> Option<&BarberProfile> {
        self.barber_profiles.iter().find(|p| p.user_id == user_id)
    }

    pub fn appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn resolve_user_name(&self, id: &str) -> String {
        self.name_or(id, "Unknown User")
    }

    pub fn resolve_barber_name(&self, id: &str) -> String {
        self.name_or(id, "Unknown Barber")
    }

    pub fn resolve_client_name(&self, id: &str) -> String {
        self.name_or(id, "Unknown Client")
    }

    pub fn resolve_service_name(&self, barber_id: &str, service_id: &str) -> String {
        self.barber_profile(barber_id)
            .and_then(|p| p.service(service_id))
            .map(|s| s.name().to_string())
            .unwrap_or_else(|| "Unknown Service".to_string())
    }

    fn name_or(&self, id: &str, fallback: &str) -> String {
        self.user(id)
            .map(|u| u.name().to_string())
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Barbers an administrator still has to approve
    pub fn pending_approvals(&self) -> Vec<&User> {
        self.users.iter().filter(|u| u.is_pending_approval()).collect()
    }

    /// Everyone an administrator can ban or unban
    pub fn moderatable_users(&self) -> Vec<&User> {
        self.users.iter().filter(|u| u.role() != Role::Admin).collect()
    }

    /// A client's bookings, newest date first
    pub fn appointments_for_client(&self, client_id: &str) -> Vec<&Appointment> {
        let mut mine: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.client_id == client_id)
            .collect();
        mine.sort_by(|a, b| b.date.cmp(&a.date));
        mine
    }

    /// A barber's bookings in the order they were made
    pub fn appointments_for_barber(&self, barber_id: &str) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.barber_id == barber_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::seed::seed_snapshot;
    use chrono::Utc;

    #[test]
    fn resolves_known_names() {
        let snapshot = seed_snapshot(Utc::now());

        assert_eq!(snapshot.resolve_barber_name("barber1"), "Edward Scissorhands");
        assert_eq!(snapshot.resolve_client_name("client1"), "John Doe");
        assert_eq!(snapshot.resolve_user_name("admin1"), "Admin");
        assert_eq!(snapshot.resolve_service_name("barber2", "s2-2"), "The Full Works");
    }

    #[test]
    fn unknown_references_fall_back_to_labels() {
        let snapshot = seed_snapshot(Utc::now());

        assert_eq!(snapshot.resolve_user_name("ghost"), "Unknown User");
        assert_eq!(snapshot.resolve_barber_name("ghost"), "Unknown Barber");
        assert_eq!(snapshot.resolve_client_name("ghost"), "Unknown Client");
        assert_eq!(snapshot.resolve_service_name("ghost", "s1-1"), "Unknown Service");
        assert_eq!(snapshot.resolve_service_name("barber1", "s2-1"), "Unknown Service");
    }

    #[test]
    fn pending_approvals_lists_only_unapproved_barbers() {
        let snapshot = seed_snapshot(Utc::now());
        let pending: Vec<&str> = snapshot.pending_approvals().iter().map(|u| u.id()).collect();

        assert_eq!(pending, vec!["barber3"]);
    }

    #[test]
    fn moderatable_users_exclude_admins() {
        let snapshot = seed_snapshot(Utc::now());
        let users = snapshot.moderatable_users();

        assert_eq!(users.len(), 5);
        assert!(users.iter().all(|u| u.role() != Role::Admin));
    }

    #[test]
    fn client_appointments_newest_first() {
        let snapshot = seed_snapshot(Utc::now());
        let ids: Vec<&str> = snapshot
            .appointments_for_client("client1")
            .iter()
            .map(|a| a.id.as_str())
            .collect();

        assert_eq!(ids, vec!["appt1", "appt2", "appt3"]);
    }

    #[test]
    fn barber_appointments_filter_by_barber() {
        let snapshot = seed_snapshot(Utc::now());

        assert_eq!(snapshot.appointments_for_barber("barber1").len(), 2);
        assert_eq!(snapshot.appointments_for_barber("barber3").len(), 0);
    }
}
