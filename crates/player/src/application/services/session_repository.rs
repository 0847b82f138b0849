//! Session repository
//!
//! Local storage is a shadow of the store, not a second source of truth. It is
//! read once when the app starts and written when a wizard step completes.
//! Nothing else touches the storage keys.

use storybook_domain::{ChildProfile, ThemeValue};

use crate::ports::outbound::{storage_keys, StorageProvider};

/// What survived from a previous session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub profile: Option<ChildProfile>,
    pub theme: Option<ThemeValue>,
}

pub struct SessionRepository<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> SessionRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the stored session.
    ///
    /// Unreadable entries are removed and treated as absent. A theme without a
    /// profile is dropped, since it could never be used.
    pub fn load(&self) -> StoredSession {
        let profile = self
            .storage
            .load(storage_keys::CHILD_PROFILE)
            .and_then(|raw| match serde_json::from_str::<ChildProfile>(&raw) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    tracing::warn!("Discarding stored child profile: {}", e);
                    self.storage.remove(storage_keys::CHILD_PROFILE);
                    None
                }
            });

        let theme = self
            .storage
            .load(storage_keys::SELECTED_THEME)
            .and_then(|raw| match raw.parse::<ThemeValue>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::warn!("Discarding stored theme {:?}: {}", raw, e);
                    self.storage.remove(storage_keys::SELECTED_THEME);
                    None
                }
            });

        let theme = if profile.is_some() { theme } else { None };

        tracing::debug!(
            "Loaded session: profile={}, theme={:?}",
            profile.is_some(),
            theme
        );
        StoredSession { profile, theme }
    }

    pub fn save_profile(&self, profile: &ChildProfile) {
        match serde_json::to_string(profile) {
            Ok(json) => self.storage.save(storage_keys::CHILD_PROFILE, &json),
            Err(e) => tracing::error!("Failed to serialize child profile: {}", e),
        }
    }

    pub fn save_theme(&self, theme: ThemeValue) {
        self.storage.save(storage_keys::SELECTED_THEME, theme.as_str());
    }

    pub fn clear(&self) {
        self.storage.remove(storage_keys::CHILD_PROFILE);
        self.storage.remove(storage_keys::SELECTED_THEME);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockStorageProvider;
    use storybook_domain::{Gender, ProfileDraft};

    fn profile(photo: Option<&str>) -> ChildProfile {
        ProfileDraft {
            name: "지우".to_string(),
            age: Some(5),
            gender: Some(Gender::Boy),
            photo: photo.map(str::to_string),
        }
        .validate(false)
        .unwrap()
    }

    #[test]
    fn test_profile_round_trip() {
        let storage = MockStorageProvider::new();
        let repository = SessionRepository::new(storage.clone());

        for original in [profile(None), profile(Some("data:image/png;base64,AAAA"))] {
            repository.save_profile(&original);
            let reloaded = SessionRepository::new(storage.clone()).load();
            assert_eq!(reloaded.profile, Some(original));
        }
    }

    #[test]
    fn test_theme_is_stored_as_raw_value() {
        let storage = MockStorageProvider::new();
        let repository = SessionRepository::new(storage.clone());

        repository.save_profile(&profile(None));
        repository.save_theme(ThemeValue::FinancialLiteracy);

        assert_eq!(
            storage.load(storage_keys::SELECTED_THEME).as_deref(),
            Some("financial_literacy")
        );
        assert_eq!(repository.load().theme, Some(ThemeValue::FinancialLiteracy));
    }

    #[test]
    fn test_corrupt_entries_are_removed() {
        let storage = MockStorageProvider::new();
        storage.save(storage_keys::CHILD_PROFILE, "{\"name\":");
        storage.save(storage_keys::SELECTED_THEME, "space_travel");

        let session = SessionRepository::new(storage.clone()).load();

        assert_eq!(session, StoredSession::default());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_invalid_stored_profile_is_rejected() {
        let storage = MockStorageProvider::new();
        storage.save(
            storage_keys::CHILD_PROFILE,
            r#"{"name":"   ","age":5,"gender":"boy"}"#,
        );

        let session = SessionRepository::new(storage.clone()).load();
        assert_eq!(session.profile, None);
        assert_eq!(storage.load(storage_keys::CHILD_PROFILE), None);
    }

    #[test]
    fn test_theme_without_profile_is_ignored() {
        let storage = MockStorageProvider::new();
        storage.save(storage_keys::SELECTED_THEME, "safety_habits");

        let session = SessionRepository::new(storage).load();
        assert_eq!(session.theme, None);
    }

    #[test]
    fn test_clear_removes_everything() {
        let storage = MockStorageProvider::new();
        let repository = SessionRepository::new(storage.clone());
        repository.save_profile(&profile(None));
        repository.save_theme(ThemeValue::HealthyEating);

        repository.clear();

        assert!(storage.is_empty());
        assert_eq!(repository.load(), StoredSession::default());
    }
}
