use crate::infrastructure::storage::backend::{PROFILE_KEY, StorageBackend};
use crate::infrastructure::storage::error::{Result, StoreError};
use fg_core::types::conversation::Conversation;
use fg_core::types::user_profile::UserProfile;
use fg_core::utils::rw_lock::RwLockExt;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Single profile record. Every read-modify-write runs under `write_guard`
/// so concurrent updates never overwrite each other.
#[derive(Debug)]
pub struct ProfileRepository {
    backend: Arc<dyn StorageBackend>,
    write_guard: RwLock<()>,
}

impl ProfileRepository {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        ProfileRepository {
            backend,
            write_guard: RwLock::new(()),
        }
    }

    /// `Ok(None)` when no profile was ever written.
    pub fn find(&self) -> Result<Option<UserProfile>> {
        let Some(raw) = self.backend.get(PROFILE_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupted {
                key: PROFILE_KEY.to_string(),
                source,
            })
    }

    /// Stored profile, or a fresh default when missing or unreadable.
    pub fn find_or_default(&self) -> UserProfile {
        match self.find() {
            Ok(Some(profile)) => profile,
            Ok(None) => UserProfile::default(),
            Err(err) => {
                warn!("Falling back to a default profile: {err}");
                UserProfile::default()
            }
        }
    }

    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        let raw = serde_json::to_string(profile).map_err(|source| StoreError::Serialize {
            key: PROFILE_KEY.to_string(),
            source,
        })?;
        self.backend.set(PROFILE_KEY, &raw)
    }

    pub fn remove(&self) -> Result<()> {
        let _guard = self.write_guard.write_lock("removing profile")?;
        self.backend.remove(PROFILE_KEY)
    }

    /// Returns the stored profile, creating and persisting a default one on
    /// first use. A corrupted record is replaced.
    pub fn load_or_create(&self) -> Result<UserProfile> {
        let _guard = self.write_guard.write_lock("loading profile")?;
        self.load_or_create_locked()
    }

    fn load_or_create_locked(&self) -> Result<UserProfile> {
        match self.find() {
            Ok(Some(profile)) => return Ok(profile),
            Ok(None) => debug!("No profile stored yet, creating one"),
            Err(err) if err.is_corrupted() => warn!("Replacing corrupted profile: {err}"),
            Err(err) => return Err(err),
        }
        let profile = UserProfile::default();
        self.save(&profile)?;
        Ok(profile)
    }

    pub fn update(&self, apply: impl FnOnce(&mut UserProfile)) -> Result<UserProfile> {
        let _guard = self.write_guard.write_lock("updating profile")?;
        let mut profile = self.load_or_create_locked()?;
        apply(&mut profile);
        self.save(&profile)?;
        Ok(profile)
    }

    /// Keeps the profile's embedded conversation list equal to the collection.
    pub fn sync_conversations(&self, conversations: &[Conversation]) -> Result<()> {
        self.update(|profile| profile.conversations = conversations.to_vec())
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::backend::{DisabledStorage, MemoryStorage};
    use fg_core::types::financial_topic::FinancialTopic;

    fn repo() -> (Arc<MemoryStorage>, ProfileRepository) {
        let storage = Arc::new(MemoryStorage::new());
        (storage.clone(), ProfileRepository::new(storage))
    }

    #[test]
    fn test_round_trip() {
        let (_, repo) = repo();
        let mut profile = UserProfile::default();
        profile.name = Some("Asha".to_string());
        profile.preferred_language = "ta".to_string();
        profile.add_financial_topic(FinancialTopic::TaxPlanning);
        profile.onboarding_completed = true;

        repo.save(&profile).unwrap();
        assert_eq!(repo.find().unwrap(), Some(profile));
    }

    #[test]
    fn test_never_written_is_none() {
        let (_, repo) = repo();
        assert!(repo.find().unwrap().is_none());
    }

    #[test]
    fn test_corrupted_is_distinguishable() {
        let (storage, repo) = repo();
        storage.set(PROFILE_KEY, "{not json").unwrap();

        assert!(repo.find().unwrap_err().is_corrupted());
        assert_eq!(repo.find_or_default().preferred_language, "en");

        let created = repo.load_or_create().unwrap();
        assert_eq!(repo.find().unwrap(), Some(created));
    }

    #[test]
    fn test_load_or_create_is_stable() {
        let (_, repo) = repo();
        let first = repo.load_or_create().unwrap();
        let second = repo.load_or_create().unwrap();
        assert_eq!(first.id, second.id);
        assert!(!first.onboarding_completed);
    }

    #[test]
    fn test_update_persists() {
        let (_, repo) = repo();
        repo.update(|p| p.onboarding_completed = true).unwrap();
        assert!(repo.find().unwrap().unwrap().onboarding_completed);
    }

    #[test]
    fn test_concurrent_updates_are_not_lost() {
        let repo = Arc::new(repo().1);
        let writers: Vec<_> = (0..4)
            .map(|n| {
                let repo = repo.clone();
                std::thread::spawn(move || {
                    for i in 0..250 {
                        let topic = FinancialTopic::ALL[(n + i) % FinancialTopic::ALL.len()];
                        repo.update(|p| {
                            p.add_financial_topic(topic);
                        })
                        .unwrap();
                    }
                })
            })
            .collect();

        let renamer = {
            let repo = repo.clone();
            std::thread::spawn(move || {
                for i in 0..500 {
                    let name = format!("n{i}");
                    repo.update(|p| p.name = Some(name.clone())).unwrap();
                    assert_eq!(repo.find().unwrap().unwrap().name, Some(name));
                }
            })
        };

        for writer in writers {
            writer.join().unwrap();
        }
        renamer.join().unwrap();

        let profile = repo.find().unwrap().unwrap();
        assert_eq!(profile.name.as_deref(), Some("n499"));
        assert_eq!(profile.financial_topics.len(), FinancialTopic::ALL.len());
    }

    #[test]
    fn test_disabled_backend_never_stores() {
        let repo = ProfileRepository::new(Arc::new(DisabledStorage));
        repo.load_or_create().unwrap();
        assert!(repo.find().unwrap().is_none());
    }
}
