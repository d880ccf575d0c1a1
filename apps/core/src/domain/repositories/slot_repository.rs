use async_trait::async_trait;

/// Slot holding the JSON-serialized signed-in user
pub const SESSION_SLOT: &str = "currentUser";

/// Slot holding the theme preference, `light` or `dark`
pub const THEME_SLOT: &str = "theme";

/// Repository trait for small named values that survive a restart
///
/// Implementations store one string per key. A missing key is `Ok(None)`,
/// not an error.
#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Read the value stored under `key`
    async fn read(&self, key: &str) -> Result<Option<String>, String>;

    /// Store `value` under `key`, replacing any previous value
    async fn write(&self, key: &str, value: &str) -> Result<(), String>;

    /// Remove `key`; removing a missing key succeeds
    async fn remove(&self, key: &str) -> Result<(), String>;
}
