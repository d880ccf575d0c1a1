use chrono::{DateTime, Utc};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::{broadcast, Mutex};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::snapshot::StoreSnapshot;
use crate::config::StoreConfig;
use crate::domain::appointment::{Appointment, AppointmentStatus, Rating};
use crate::domain::barber::BarberProfile;
use crate::domain::events::StoreEvent;
use crate::domain::repositories::{SlotRepository, SESSION_SLOT, THEME_SLOT};
use crate::domain::user::{Email, ModerationFlags, Role, User};
use crate::domain::{StoreError, StoreResult, Theme};
use crate::infrastructure::repositories::{FileSlotRepository, InMemorySlotRepository};
use crate::infrastructure::seed::seed_snapshot;

struct StoreState {
    data: StoreSnapshot,
    current_user: Option<User>,
    theme: Theme,
}

/// Single owner of users, barber profiles, appointments, the signed-in
/// session and the theme preference
///
/// Mutating operations wait for their configured latency and then commit in
/// one critical section. Two overlapping calls commit in the order their
/// delays expire, not the order they were issued. Dropping an operation's
/// future before the delay expires leaves the store untouched.
///
/// Every query returns owned data; nothing hands out a reference into the
/// store's collections.
pub struct DomainStore {
    config: StoreConfig,
    state: RwLock<StoreState>,
    slots: Arc<dyn SlotRepository>,
    /// Serializes slot writes; each write stores the state current at that time
    persist: Mutex<()>,
    events: broadcast::Sender<StoreEvent>,
}

impl DomainStore {
    /// Creates a store over `data` with no session and the default theme
    pub fn new(config: StoreConfig, data: StoreSnapshot, slots: Arc<dyn SlotRepository>) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity());
        Self {
            config,
            state: RwLock::new(StoreState {
                data,
                current_user: None,
                theme: Theme::default(),
            }),
            slots,
            persist: Mutex::new(()),
            events,
        }
    }

    /// Creates a store and restores the persisted session and theme
    ///
    /// Unreadable slots are logged and treated as absent.
    pub async fn restore(config: StoreConfig, data: StoreSnapshot, slots: Arc<dyn SlotRepository>) -> Self {
        let current_user = match slots.read(SESSION_SLOT).await {
            Ok(Some(json)) => serde_json::from_str::<User>(&json)
                .map_err(|e| warn!(error = %e, "discarding unreadable session slot"))
                .ok(),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "failed to read session slot");
                None
            }
        };

        let theme = match slots.read(THEME_SLOT).await {
            Ok(Some(value)) => value.parse::<Theme>().unwrap_or_else(|e| {
                warn!(error = %e, "ignoring unknown theme preference");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(error = %e, "failed to read theme slot");
                Theme::default()
            }
        };

        if let Some(user) = &current_user {
            info!(user_id = %user.id(), "restored session");
        }

        let store = Self::new(config, data, slots);
        {
            let mut state = store.write();
            state.current_user = current_user;
            state.theme = theme;
        }
        store
    }

    /// Opens the seeded store described by `config`
    ///
    /// Slots live in `config.data_dir()` when set, in memory otherwise.
    pub async fn open(config: StoreConfig) -> Self {
        let slots: Arc<dyn SlotRepository> = match config.data_dir() {
            Some(dir) => Arc::new(FileSlotRepository::new(dir.clone())),
            None => Arc::new(InMemorySlotRepository::new()),
        };
        Self::restore(config, seed_snapshot(Utc::now()), slots).await
    }

    // ===== Session =====

    /// Signs a user in by exact email and password
    ///
    /// # Errors
    /// * `InvalidCredentials` - No user has this email/password pair
    /// * `AccountBanned` - The user is banned (checked before approval)
    /// * `PendingApproval` - The user is a barber not yet approved
    pub async fn authenticate(&self, email: &str, password: &str) -> StoreResult<User> {
        sleep(self.config.latency().authenticate).await;

        let user = {
            let mut state = self.write();
            let user = state
                .data
                .users
                .iter()
                .find(|u| u.email().as_str() == email && u.password_matches(password))
                .cloned()
                .ok_or(StoreError::InvalidCredentials)?;

            if user.is_banned() {
                return Err(StoreError::AccountBanned);
            }
            if user.is_pending_approval() {
                return Err(StoreError::PendingApproval);
            }

            state.current_user = Some(user.clone());
            user
        };

        info!(user_id = %user.id(), role = %user.role(), "session started");
        self.persist_session().await;
        self.publish(StoreEvent::SessionStarted {
            user_id: user.id().to_string(),
        });
        Ok(user)
    }

    /// Clears the current session and its persisted slot
    ///
    /// Without a signed-in user only the slot is cleared; nothing is published.
    pub async fn end_session(&self) {
        let previous = self.write().current_user.take();

        self.persist_session().await;
        match previous {
            Some(user) => {
                info!(user_id = %user.id(), "session ended");
                self.publish(StoreEvent::SessionEnded);
            }
            None => debug!("no session to end"),
        }
    }

    // ===== Commands =====

    /// Creates an account; barbers also get a placeholder profile
    ///
    /// Does not sign the new user in.
    ///
    /// # Errors
    /// * `InvalidEmail` - The address is malformed
    /// * `EmailAlreadyExists` - Another user has exactly this email
    pub async fn register_user(&self, name: &str, email: &str, password: &str, role: Role) -> StoreResult<User> {
        sleep(self.config.latency().register).await;

        let email = Email::new(email).map_err(StoreError::InvalidEmail)?;

        let user = {
            let mut state = self.write();
            if state.data.users.iter().any(|u| u.email() == &email) {
                return Err(StoreError::EmailAlreadyExists);
            }

            let user = User::register(name, email, password, role);
            state.data.users.push(user.clone());
            if role == Role::Barber {
                state
                    .data
                    .barber_profiles
                    .push(BarberProfile::placeholder(user.id(), user.name()));
            }
            user
        };

        info!(user_id = %user.id(), role = %role, "user registered");
        self.publish(StoreEvent::UserRegistered {
            user_id: user.id().to_string(),
            role,
        });
        Ok(user)
    }

    /// Books an appointment in `Scheduled` status
    ///
    /// The client, barber and service ids are stored as given. Nothing checks
    /// that they exist; unresolved references only show up as `Unknown …`
    /// names later.
    pub async fn record_appointment(
        &self,
        client_id: &str,
        barber_id: &str,
        service_id: &str,
        date: DateTime<Utc>,
    ) -> Appointment {
        sleep(self.config.latency().record_appointment).await;

        let appointment = Appointment::book(client_id, barber_id, service_id, date);
        {
            let mut state = self.write();
            if state.data.user(client_id).is_none()
                || state.data.barber_profile(barber_id).and_then(|p| p.service(service_id)).is_none()
            {
                // Foreign keys are not enforced; the booking is kept as given.
                debug!(client_id, barber_id, service_id, "recording appointment with unresolved references");
            }
            state.data.appointments.push(appointment.clone());
        }

        info!(appointment_id = %appointment.id, barber_id, "appointment recorded");
        self.publish(StoreEvent::AppointmentRecorded {
            appointment_id: appointment.id.clone(),
            barber_id: barber_id.to_string(),
        });
        appointment
    }

    /// Applies ban/approval flags; unknown ids are ignored
    pub async fn set_user_moderation_flags(&self, user_id: &str, flags: ModerationFlags) {
        sleep(self.config.latency().moderate).await;

        let found = {
            let mut state = self.write();
            match state.data.users.iter_mut().find(|u| u.id() == user_id) {
                Some(user) => {
                    user.apply_moderation(flags);
                    true
                }
                None => false,
            }
        };

        if !found {
            debug!(user_id, "moderation target not found");
            return;
        }

        info!(user_id, banned = ?flags.is_banned, approved = ?flags.is_approved, "moderation flags updated");
        self.publish(StoreEvent::ModerationFlagsChanged {
            user_id: user_id.to_string(),
            flags,
        });
    }

    /// Swaps in a whole new profile for `profile.user_id`
    ///
    /// Never inserts: a profile for an unknown user id is ignored.
    pub async fn replace_barber_profile(&self, profile: BarberProfile) {
        sleep(self.config.latency().replace_profile).await;

        let user_id = profile.user_id.clone();
        let found = {
            let mut state = self.write();
            match state.data.barber_profiles.iter_mut().find(|p| p.user_id == user_id) {
                Some(slot) => {
                    *slot = profile;
                    true
                }
                None => false,
            }
        };

        if !found {
            debug!(user_id = %user_id, "no profile to replace");
            return;
        }

        info!(user_id = %user_id, "barber profile replaced");
        self.publish(StoreEvent::ProfileReplaced { user_id });
    }

    /// Sets rating and review on an appointment; unknown ids are ignored
    ///
    /// The appointment's status is not checked.
    pub async fn rate_appointment(&self, appointment_id: &str, rating: Rating, review: &str) {
        sleep(self.config.latency().rate).await;

        let barber_id = {
            let mut state = self.write();
            state
                .data
                .appointments
                .iter_mut()
                .find(|a| a.id == appointment_id)
                .map(|appointment| {
                    appointment.rate(rating, review);
                    appointment.barber_id.clone()
                })
        };

        let Some(barber_id) = barber_id else {
            debug!(appointment_id, "appointment to rate not found");
            return;
        };

        info!(appointment_id, stars = rating.stars(), "appointment rated");
        self.publish(StoreEvent::AppointmentRated {
            appointment_id: appointment_id.to_string(),
            barber_id,
        });
    }

    /// Moves a scheduled appointment to `Completed` or `Cancelled`
    ///
    /// Unknown ids are ignored.
    ///
    /// # Errors
    /// * `InvalidStatusTransition` - The appointment is not `Scheduled`, or
    ///   `next` is `Scheduled`
    pub async fn transition_appointment(&self, appointment_id: &str, next: AppointmentStatus) -> StoreResult<()> {
        sleep(self.config.latency().transition).await;

        let previous = {
            let mut state = self.write();
            match state.data.appointments.iter_mut().find(|a| a.id == appointment_id) {
                Some(appointment) => Some(
                    appointment
                        .transition_to(next)
                        .map_err(|from| StoreError::InvalidStatusTransition { from, to: next })?,
                ),
                None => None,
            }
        };

        let Some(from) = previous else {
            debug!(appointment_id, "appointment to transition not found");
            return Ok(());
        };

        info!(appointment_id, %from, to = %next, "appointment status changed");
        self.publish(StoreEvent::AppointmentStatusChanged {
            appointment_id: appointment_id.to_string(),
            from,
            to: next,
        });
        Ok(())
    }

    /// Flips between light and dark and persists the choice
    pub async fn toggle_theme(&self) -> Theme {
        let theme = {
            let mut state = self.write();
            state.theme = state.theme.toggled();
            state.theme
        };

        self.persist_theme().await;
        self.publish(StoreEvent::ThemeChanged { theme });
        theme
    }

    // ===== Queries =====

    pub fn current_user(&self) -> Option<User> {
        self.read().current_user.clone()
    }

    pub fn theme(&self) -> Theme {
        self.read().theme
    }

    /// Owned copy of every collection
    pub fn snapshot(&self) -> StoreSnapshot {
        self.read().data.clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.read().data.users.clone()
    }

    pub fn barber_profiles(&self) -> Vec<BarberProfile> {
        self.read().data.barber_profiles.clone()
    }

    pub fn appointments(&self) -> Vec<Appointment> {
        self.read().data.appointments.clone()
    }

    /// The profile to use as an edit buffer
    pub fn barber_profile(&self, user_id: &str) -> Option<BarberProfile> {
        self.read().data.barber_profile(user_id).cloned()
    }

    pub fn pending_approvals(&self) -> Vec<User> {
        self.read().data.pending_approvals().into_iter().cloned().collect()
    }

    pub fn moderatable_users(&self) -> Vec<User> {
        self.read().data.moderatable_users().into_iter().cloned().collect()
    }

    pub fn appointments_for_client(&self, client_id: &str) -> Vec<Appointment> {
        self.read()
            .data
            .appointments_for_client(client_id)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn appointments_for_barber(&self, barber_id: &str) -> Vec<Appointment> {
        self.read()
            .data
            .appointments_for_barber(barber_id)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn resolve_user_name(&self, id: &str) -> String {
        self.read().data.resolve_user_name(id)
    }

    pub fn resolve_barber_name(&self, id: &str) -> String {
        self.read().data.resolve_barber_name(id)
    }

    pub fn resolve_client_name(&self, id: &str) -> String {
        self.read().data.resolve_client_name(id)
    }

    pub fn resolve_service_name(&self, barber_id: &str, service_id: &str) -> String {
        self.read().data.resolve_service_name(barber_id, service_id)
    }

    /// Receives every change committed after this call
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    // ===== Internals =====

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, event: StoreEvent) {
        let kind = event.kind();
        match self.events.send(event) {
            Ok(count) => debug!(kind, subscribers = count, "store event published"),
            Err(_) => debug!(kind, "store event published (no subscribers)"),
        }
    }

    /// Writes the session as it stands now, not as a caller last saw it
    async fn persist_session(&self) {
        let _guard = self.persist.lock().await;
        let user = self.read().current_user.clone();

        let result = match user {
            Some(user) => match serde_json::to_string(&user) {
                Ok(json) => self.slots.write(SESSION_SLOT, &json).await,
                Err(e) => Err(format!("Failed to serialize session: {}", e)),
            },
            None => self.slots.remove(SESSION_SLOT).await,
        };

        if let Err(e) = result {
            warn!(error = %e, "failed to persist session");
        }
    }

    async fn persist_theme(&self) {
        let _guard = self.persist.lock().await;
        let theme = self.read().theme;

        if let Err(e) = self.slots.write(THEME_SLOT, theme.as_str()).await {
            warn!(error = %e, "failed to persist theme");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DomainStore {
        DomainStore::new(
            StoreConfig::instant(),
            seed_snapshot(Utc::now()),
            Arc::new(InMemorySlotRepository::new()),
        )
    }

    #[tokio::test]
    async fn authenticate_seeded_client() {
        let store = store();

        let user = store.authenticate("john@email.com", "password").await.unwrap();

        assert_eq!(user.id(), "client1");
        assert_eq!(store.current_user(), Some(user));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let store = store();

        let result = store.authenticate("john@email.com", "nope").await;

        assert_eq!(result, Err(StoreError::InvalidCredentials));
        assert!(store.current_user().is_none());
    }

    #[tokio::test]
    async fn email_match_is_case_sensitive() {
        let store = store();

        let result = store.authenticate("John@email.com", "password").await;

        assert_eq!(result, Err(StoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn banned_client_is_refused() {
        let store = store();

        let result = store.authenticate("jane@email.com", "password").await;

        assert_eq!(result, Err(StoreError::AccountBanned));
    }

    #[tokio::test]
    async fn pending_barber_is_refused() {
        let store = store();

        let result = store.authenticate("pete@barberbook.com", "password").await;

        assert_eq!(result, Err(StoreError::PendingApproval));
    }

    #[tokio::test]
    async fn end_session_clears_current_user() {
        let store = store();
        store.authenticate("john@email.com", "password").await.unwrap();

        store.end_session().await;

        assert!(store.current_user().is_none());
    }

    #[tokio::test]
    async fn ending_without_session_publishes_nothing() {
        let store = store();
        let mut events = store.subscribe();

        store.end_session().await;

        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn ending_a_session_publishes_once() {
        let store = store();
        store.authenticate("john@email.com", "password").await.unwrap();
        let mut events = store.subscribe();

        store.end_session().await;
        store.end_session().await;

        assert_eq!(events.try_recv().unwrap(), StoreEvent::SessionEnded);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn invalid_email_leaves_users_unchanged() {
        let store = store();
        let before = store.users();

        let result = store.register_user("X", "not-an-email", "pw", Role::Client).await;

        assert!(matches!(result, Err(StoreError::InvalidEmail(_))));
        assert_eq!(store.users(), before);
    }

    #[tokio::test]
    async fn record_appointment_accepts_unknown_references() {
        let store = store();

        let appt = store
            .record_appointment("nobody", "no-barber", "no-service", Utc::now())
            .await;

        assert_eq!(appt.status, AppointmentStatus::Scheduled);
        assert_eq!(store.appointments().len(), 4);
        assert_eq!(store.resolve_barber_name(&appt.barber_id), "Unknown Barber");
    }

    #[tokio::test]
    async fn replace_profile_for_unknown_user_is_ignored() {
        let store = store();
        let before = store.barber_profiles();

        store
            .replace_barber_profile(BarberProfile::placeholder("ghost", "Ghost"))
            .await;

        assert_eq!(store.barber_profiles(), before);
    }

    #[tokio::test]
    async fn replace_profile_overwrites_whole_value() {
        let store = store();
        let mut draft = store.barber_profile("barber1").unwrap();
        draft.bio = "Fresh bio".to_string();
        draft.remove_service("s1-2");

        store.replace_barber_profile(draft.clone()).await;

        assert_eq!(store.barber_profile("barber1"), Some(draft));
        assert_eq!(store.resolve_service_name("barber1", "s1-2"), "Unknown Service");
    }

    #[tokio::test]
    async fn rate_ignores_status() {
        let store = store();

        store
            .rate_appointment("appt1", Rating::new(3).unwrap(), "rated early")
            .await;

        let appt1 = store.snapshot().appointment("appt1").cloned().unwrap();
        assert_eq!(appt1.status, AppointmentStatus::Scheduled);
        assert_eq!(appt1.rating.map(|r| r.stars()), Some(3));
    }

    #[tokio::test]
    async fn rate_unknown_appointment_is_noop() {
        let store = store();
        let before = store.appointments();

        store.rate_appointment("missing", Rating::new(5).unwrap(), "").await;

        assert_eq!(store.appointments(), before);
    }

    #[tokio::test]
    async fn completing_a_completed_appointment_fails() {
        let store = store();

        let result = store
            .transition_appointment("appt2", AppointmentStatus::Cancelled)
            .await;

        assert_eq!(
            result,
            Err(StoreError::InvalidStatusTransition {
                from: AppointmentStatus::Completed,
                to: AppointmentStatus::Cancelled,
            })
        );
    }

    #[tokio::test]
    async fn transition_unknown_appointment_is_noop() {
        let store = store();

        assert!(store
            .transition_appointment("missing", AppointmentStatus::Completed)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn theme_defaults_to_dark_and_toggles() {
        let store = store();
        assert_eq!(store.theme(), Theme::Dark);

        assert_eq!(store.toggle_theme().await, Theme::Light);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[tokio::test]
    async fn subscribers_see_commits_but_not_misses() {
        let store = store();
        let mut events = store.subscribe();

        store
            .set_user_moderation_flags("missing", ModerationFlags::ban(true))
            .await;
        store
            .set_user_moderation_flags("barber3", ModerationFlags::approve())
            .await;

        let event = events.recv().await.unwrap();
        assert_eq!(
            event,
            StoreEvent::ModerationFlagsChanged {
                user_id: "barber3".to_string(),
                flags: ModerationFlags::approve(),
            }
        );
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn snapshots_are_detached_copies() {
        let store = store();
        let mut snapshot = store.snapshot();
        snapshot.users.clear();

        assert_eq!(store.users().len(), 6);
    }
}
