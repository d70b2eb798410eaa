use super::index::ConversationIndex;
use crate::domain::profile::repository::ProfileRepository;
use crate::infrastructure::storage::backend::{CONVERSATIONS_KEY, StorageBackend};
use crate::infrastructure::storage::error::{Result, StoreError};
use fg_core::types::conversation::Conversation;
use fg_core::types::financial_topic::FinancialTopic;
use fg_core::types::message::Message;
use fg_core::utils::rw_lock::RwLockExt;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Most-recently-touched conversations kept in the collection.
pub const MAX_CONVERSATIONS: usize = 50;

/// The conversation collection record, read once into an id-addressed index
/// and rewritten whole on every mutation.
#[derive(Debug)]
pub struct ConversationRepository {
    backend: Arc<dyn StorageBackend>,
    profiles: Arc<ProfileRepository>,
    index: RwLock<Option<ConversationIndex>>,
}

impl ConversationRepository {
    pub fn new(backend: Arc<dyn StorageBackend>, profiles: Arc<ProfileRepository>) -> Self {
        ConversationRepository {
            backend,
            profiles,
            index: RwLock::new(None),
        }
    }

    /// Most-recent-first. `Err(Corrupted)` when the stored record is unreadable.
    pub fn find_all(&self) -> Result<Vec<Conversation>> {
        self.read(|index| index.to_list())
    }

    /// Like `find_all`, degrading to an empty list.
    pub fn list(&self) -> Vec<Conversation> {
        self.find_all().unwrap_or_else(|err| {
            warn!("Reading conversations failed, using an empty list: {err}");
            Vec::new()
        })
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Conversation>> {
        self.read(|index| index.get(id).cloned())
    }

    /// Upsert by id at the front, then cap the collection.
    pub fn save(&self, conversation: &Conversation) -> Result<()> {
        self.mutate(|index| {
            index.upsert_front(conversation.clone());
            let evicted = index.truncate(MAX_CONVERSATIONS);
            if !evicted.is_empty() {
                debug!("Evicted {} old conversation(s): {:?}", evicted.len(), evicted);
            }
            Some(())
        })
        .map(|_| ())
    }

    /// `Ok(None)` when the conversation is not stored.
    pub fn add_message(&self, id: &str, message: Message) -> Result<Option<Conversation>> {
        self.mutate(|index| {
            let conversation = index.get_mut(id)?;
            conversation.add_message(message);
            let updated = conversation.clone();
            index.move_to_front(id);
            Some(updated)
        })
    }

    /// `Ok(None)` when the conversation is not stored.
    pub fn add_topic(&self, id: &str, topic: FinancialTopic) -> Result<Option<Conversation>> {
        self.mutate(|index| {
            let conversation = index.get_mut(id)?;
            let added = conversation.add_topic(topic);
            let updated = conversation.clone();
            if added {
                index.move_to_front(id);
            }
            Some(updated)
        })
    }

    /// Returns whether a stored conversation was removed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        self.mutate(|index| index.remove(id).map(|_| ()))
            .map(|removed| removed.is_some())
    }

    pub fn clear(&self) -> Result<()> {
        let mut guard = self.index.write_lock("clearing conversation index")?;
        *guard = None;
        self.backend.remove(CONVERSATIONS_KEY)
    }

    fn load(&self) -> Result<ConversationIndex> {
        let Some(raw) = self.backend.get(CONVERSATIONS_KEY)? else {
            return Ok(ConversationIndex::default());
        };
        serde_json::from_str::<Vec<Conversation>>(&raw)
            .map(ConversationIndex::from_list)
            .map_err(|source| StoreError::Corrupted {
                key: CONVERSATIONS_KEY.to_string(),
                source,
            })
    }

    fn read<R>(&self, view: impl FnOnce(&ConversationIndex) -> R) -> Result<R> {
        let mut guard = self.index.write_lock("reading conversation index")?;
        if let Some(index) = guard.as_ref() {
            return Ok(view(index));
        }
        let index = self.load()?;
        let out = view(&index);
        if self.backend.is_persistent() {
            *guard = Some(index);
        }
        Ok(out)
    }

    /// Runs `change` on the index and, when it returns `Some`, rewrites the
    /// collection record and the profile mirror. A corrupted record is
    /// treated as empty and overwritten.
    fn mutate<R>(&self, change: impl FnOnce(&mut ConversationIndex) -> Option<R>) -> Result<Option<R>> {
        let mut guard = self.index.write_lock("updating conversation index")?;
        let mut index = match guard.take() {
            Some(index) => index,
            None => match self.load() {
                Ok(index) => index,
                Err(err) if err.is_corrupted() => {
                    warn!("Discarding corrupted conversations: {err}");
                    ConversationIndex::default()
                }
                Err(err) => return Err(err),
            },
        };

        let Some(out) = change(&mut index) else {
            if self.backend.is_persistent() {
                *guard = Some(index);
            }
            return Ok(None);
        };

        let conversations = index.to_list();
        let raw = serde_json::to_string(&conversations).map_err(|source| {
            StoreError::Serialize {
                key: CONVERSATIONS_KEY.to_string(),
                source,
            }
        })?;
        // on failure the cache stays empty so the next access reloads the record
        self.backend.set(CONVERSATIONS_KEY, &raw)?;
        if self.backend.is_persistent() {
            *guard = Some(index);
        }

        // the index guard is held so mirror syncs land in collection order
        self.profiles.sync_conversations(&conversations)?;
        drop(guard);
        Ok(Some(out))
    }
}
