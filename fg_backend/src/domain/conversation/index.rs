use fg_core::types::conversation::Conversation;
use std::collections::HashMap;

/// Conversations addressed by id, ordered most-recently-touched first.
#[derive(Debug, Clone, Default)]
pub struct ConversationIndex {
    order: Vec<String>,
    by_id: HashMap<String, Conversation>,
}

impl ConversationIndex {
    /// Later duplicates of an id are dropped.
    pub fn from_list(conversations: Vec<Conversation>) -> Self {
        let mut index = ConversationIndex::default();
        for conversation in conversations {
            if index.by_id.contains_key(&conversation.id) {
                continue;
            }
            index.order.push(conversation.id.clone());
            index.by_id.insert(conversation.id.clone(), conversation);
        }
        index
    }

    pub fn to_list(&self) -> Vec<Conversation> {
        self.order
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.by_id.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.by_id.get_mut(id)
    }

    /// Inserts or replaces, and moves the entry to the front.
    pub fn upsert_front(&mut self, conversation: Conversation) {
        let id = conversation.id.clone();
        self.by_id.insert(id.clone(), conversation);
        self.move_to_front(&id);
    }

    pub fn move_to_front(&mut self, id: &str) {
        if !self.by_id.contains_key(id) {
            return;
        }
        self.order.retain(|existing| existing != id);
        self.order.insert(0, id.to_string());
    }

    pub fn remove(&mut self, id: &str) -> Option<Conversation> {
        let removed = self.by_id.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }

    /// Drops everything past `max` entries and returns the evicted ids.
    pub fn truncate(&mut self, max: usize) -> Vec<String> {
        if self.order.len() <= max {
            return Vec::new();
        }
        let evicted = self.order.split_off(max);
        for id in &evicted {
            self.by_id.remove(id);
        }
        evicted
    }
}
